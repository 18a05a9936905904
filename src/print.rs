/// 输出到终端时使用ANSI转义序列着色，重定向到文件或管道时原样输出。
macro_rules! colored_println {
    ($is_terminal:expr, $print:ident, $println:ident, $color:literal, $($arg:tt)*) => {
        if $is_terminal {
            $print!("\x1b[{}m", $color);
            $print!($($arg)*);
            $println!("\x1b[0m");
        } else {
            $println!($($arg)*);
        }
    };
}

/// 错误信息，红色加粗，输出到标准错误。
macro_rules! println_err {
    ($($arg:tt)*) => {
        colored_println!(std::io::IsTerminal::is_terminal(&std::io::stderr()), eprint, eprintln, "1;31", $($arg)*)
    };
}

/// 结果摘要，蓝色加粗。
macro_rules! println_info {
    ($($arg:tt)*) => {
        colored_println!(std::io::IsTerminal::is_terminal(&std::io::stdout()), print, println, "1;34", $($arg)*)
    };
}

/// 调试信息，紫色。
macro_rules! println_notice {
    ($($arg:tt)*) => {
        colored_println!(std::io::IsTerminal::is_terminal(&std::io::stdout()), print, println, "35", $($arg)*)
    };
}
