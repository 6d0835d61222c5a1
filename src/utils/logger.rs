// 日誌工具

pub fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };

    // 重複初始化（例如測試中）時忽略錯誤
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
