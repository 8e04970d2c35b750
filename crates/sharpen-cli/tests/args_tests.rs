use super::*;

#[test]
fn test_check_with_json() {
    let args = CliArgs::try_parse_from(["sharpen", "check", "workspace.json", "--json"])
        .expect("valid arguments");
    assert_eq!(
        args.command,
        Command::Check {
            snapshot: PathBuf::from("workspace.json"),
            json: true,
        }
    );
    assert!(args.config.is_none());
}

#[test]
fn test_refactor_defaults_to_caret() {
    let args = CliArgs::try_parse_from([
        "sharpen",
        "refactor",
        "workspace.json",
        "--document",
        "Foo.cs",
        "--offset",
        "12",
        "--config",
        "custom.json",
    ])
    .expect("valid arguments");
    assert_eq!(args.config, Some(PathBuf::from("custom.json")));
    assert_eq!(
        args.command,
        Command::Refactor {
            snapshot: PathBuf::from("workspace.json"),
            document: "Foo.cs".to_string(),
            offset: 12,
            length: 0,
        }
    );
}

#[test]
fn test_show_config_alias() {
    let args = CliArgs::try_parse_from(["sharpen", "showConfig"]).expect("valid arguments");
    assert_eq!(args.command, Command::ShowConfig);
}

#[test]
fn test_refactor_requires_offset() {
    let result = CliArgs::try_parse_from(["sharpen", "refactor", "workspace.json", "--document", "Foo.cs"]);
    assert!(result.is_err());
}
