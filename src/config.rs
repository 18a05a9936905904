/// 全局配置，只能出现在演示名称之前。
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印解析得到的演示及其说明 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
}
