use assert_cmd::Command;

pub fn dentdoc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dentdoc").unwrap();
    cmd.env_remove("DENTDOC_CONFIG");
    cmd.env_remove("DENTDOC_ID_STRATEGY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Today's date as rendered by the default date format
pub fn today_ru() -> String {
    chrono::Local::now()
        .date_naive()
        .format("%d.%m.%Y")
        .to_string()
}
