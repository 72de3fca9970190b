use clap::Parser;
use medialink::engine::{
    Cli, is_eligible, load_file_settings, mirrored_target, path_relative_to, resolve_roots,
    setup_opts,
};
use medialink::utils::{ConfigFile, WorkerConsts};
use medialink::{LinkTask, Summary};
use std::path::{Path, PathBuf};

// --- path_relative_to ---

#[test]
fn test_path_relative_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/foo/bar/baz/qux.mkv");
    assert_eq!(
        path_relative_to(&path, &base),
        Some(PathBuf::from("baz/qux.mkv"))
    );
}

#[test]
fn test_path_relative_not_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/other/qux.mkv");
    assert_eq!(path_relative_to(&path, &base), None);
}

#[test]
fn test_path_relative_sibling_prefix_is_not_under_base() {
    let base = PathBuf::from("/media/tv");
    let path = PathBuf::from("/media/tv2/show.mkv");
    assert_eq!(path_relative_to(&path, &base), None);
}

// --- mirrored_target / LinkTask ---

#[test]
fn test_mirrored_target_keeps_relative_layout() {
    assert_eq!(
        mirrored_target(
            Path::new("/media/a/b/clip.mp4"),
            Path::new("/media"),
            Path::new("/links")
        ),
        Some(PathBuf::from("/links/a/b/clip.mp4"))
    );
}

#[test]
fn test_link_task_target_path() {
    let task = LinkTask::new(PathBuf::from("/media/movie.mkv"));
    assert_eq!(
        task.target_path(Path::new("/media"), Path::new("/srv/links")),
        Some(PathBuf::from("/srv/links/movie.mkv"))
    );
    assert_eq!(
        task.target_path(Path::new("/elsewhere"), Path::new("/srv/links")),
        None
    );
}

// --- is_eligible ---

#[test]
fn test_eligible_extensions() {
    for name in [
        "a.mkv", "a.iso", "a.ts", "a.mp4", "a.avi", "a.rmvb", "a.wmv", "a.m2ts", "a.mpg", "a.flv",
        "a.rm", "a.mov",
    ] {
        assert!(is_eligible(Path::new(name)), "{name} should be eligible");
    }
}

#[test]
fn test_eligible_is_case_sensitive() {
    assert!(!is_eligible(Path::new("/media/MOVIE.MKV")));
    assert!(!is_eligible(Path::new("/media/clip.Mp4")));
}

#[test]
fn test_not_eligible() {
    assert!(!is_eligible(Path::new("/media/readme.txt")));
    assert!(!is_eligible(Path::new("/media/cover.jpg")));
    assert!(!is_eligible(Path::new("/media/movie.mkv.part")));
    assert!(!is_eligible(Path::new("/media/subs.srt")));
    assert!(!is_eligible(Path::new("/")));
}

#[test]
fn test_eligible_uses_final_segment_only() {
    assert!(!is_eligible(Path::new("/media/season.mkv/notes.txt")));
    assert!(is_eligible(Path::new("/media/notes.txt/ep1.mkv")));
}

#[test]
fn test_suffix_match_not_extension_match() {
    // Bare dot-names still end with the suffix.
    assert!(is_eligible(Path::new("/media/.ts")));
    assert!(is_eligible(Path::new("/media/.rm")));
    assert!(!is_eligible(Path::new("/media/parts")));
}

// --- Summary ---

#[test]
fn test_summary_line_contains_totals() {
    let summary = Summary {
        elapsed_secs: 1.234,
        total_processed: 5,
        created: 3,
        existing: 2,
        ..Summary::default()
    };
    let line = summary.to_string();
    assert!(line.contains("1.23"));
    assert!(line.contains("processed: 5"));
    assert!(line.contains("created: 3"));
    assert!(line.contains("existing (skipped): 2"));
    assert!(!line.contains("failed"));
}

#[test]
fn test_summary_json_fields() {
    let summary = Summary {
        created: 1,
        total_processed: 1,
        ..Summary::default()
    };
    let v: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(v["created"], 1);
    assert_eq!(v["existing"], 0);
    assert_eq!(v["total_processed"], 1);
    assert_eq!(v["cancelled"], false);
}

// --- CLI root resolution ---

#[test]
fn test_positional_roots_win() {
    let cli = Cli::try_parse_from(["medialink", "/src", "/dst"]).unwrap();
    let file = ConfigFile {
        media_dir: Some("/other".into()),
        symlink_dir: Some("/other-links".into()),
        ..ConfigFile::default()
    };
    let (s, t) = resolve_roots(&cli, Some(&file)).unwrap();
    assert_eq!(s, PathBuf::from("/src"));
    assert_eq!(t, PathBuf::from("/dst"));
}

#[test]
fn test_roots_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    std::fs::write(&cfg, "media_dir=/mnt/media\nsymlink_dir=/mnt/links\nworkers=3\n").unwrap();

    let cli = Cli::try_parse_from(["medialink", "--config", cfg.to_str().unwrap()]).unwrap();
    let file = load_file_settings(&cli).unwrap();
    let (s, t) = resolve_roots(&cli, file.as_ref()).unwrap();
    assert_eq!(s, PathBuf::from("/mnt/media"));
    assert_eq!(t, PathBuf::from("/mnt/links"));

    let opts = setup_opts(&cli, file.as_ref());
    assert_eq!(opts.link.num_workers, 3);
}

#[test]
fn test_empty_root_in_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    std::fs::write(&cfg, "media_dir=/mnt/media\nsymlink_dir=\n").unwrap();

    let cli = Cli::try_parse_from(["medialink", "-c", cfg.to_str().unwrap()]).unwrap();
    let file = load_file_settings(&cli).unwrap();
    let err = resolve_roots(&cli, file.as_ref()).unwrap_err();
    assert!(err.to_string().contains("Please provide source folder and target folder paths."));
}

#[test]
fn test_missing_config_without_roots_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    let cli = Cli::try_parse_from(["medialink", "-c", cfg.to_str().unwrap()]).unwrap();
    assert!(load_file_settings(&cli).is_err());
}

#[test]
fn test_missing_config_with_roots_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    let cli =
        Cli::try_parse_from(["medialink", "/src", "/dst", "-c", cfg.to_str().unwrap()]).unwrap();
    assert_eq!(load_file_settings(&cli).unwrap(), None);
}

#[test]
fn test_roots_on_command_line_ignore_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    std::fs::write(&cfg, "media_dir /mnt/media\nworkers=many\n").unwrap();

    let cli =
        Cli::try_parse_from(["medialink", "/src", "/dst", "-c", cfg.to_str().unwrap()]).unwrap();
    let file = load_file_settings(&cli).unwrap();
    assert_eq!(file, None);
    let (s, t) = resolve_roots(&cli, file.as_ref()).unwrap();
    assert_eq!(s, PathBuf::from("/src"));
    assert_eq!(t, PathBuf::from("/dst"));
    assert_eq!(
        setup_opts(&cli, file.as_ref()).link.num_workers,
        WorkerConsts::DEFAULT_WORKERS
    );
}

#[test]
fn test_roots_with_spaces_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.txt");
    std::fs::write(&cfg, "media_dir=/mnt/My Movies\nsymlink_dir=/mnt/$links\n").unwrap();

    let cli = Cli::try_parse_from(["medialink", "-c", cfg.to_str().unwrap()]).unwrap();
    let file = load_file_settings(&cli).unwrap();
    let (s, t) = resolve_roots(&cli, file.as_ref()).unwrap();
    assert_eq!(s, PathBuf::from("/mnt/My Movies"));
    assert_eq!(t, PathBuf::from("/mnt/$links"));
}

#[test]
fn test_cli_flags_override_file() {
    let cli = Cli::try_parse_from(["medialink", "/s", "/t", "-w", "16", "--log-file", "x.log"]).unwrap();
    let file = ConfigFile {
        workers: Some(2),
        log_file: Some(PathBuf::from("file.log")),
        ..ConfigFile::default()
    };
    let opts = setup_opts(&cli, Some(&file));
    assert_eq!(opts.link.num_workers, 16);
    assert_eq!(opts.log_file, Some(PathBuf::from("x.log")));
}

#[test]
fn test_defaults_without_file() {
    let cli = Cli::try_parse_from(["medialink", "/s", "/t"]).unwrap();
    let opts = setup_opts(&cli, None);
    assert_eq!(opts.link.num_workers, WorkerConsts::DEFAULT_WORKERS);
    assert_eq!(opts.log_file, Some(PathBuf::from("medialink.log")));
    assert!(!opts.link.strict);
}

#[test]
fn test_no_log_file_flag() {
    let cli = Cli::try_parse_from(["medialink", "/s", "/t", "--no-log-file"]).unwrap();
    assert_eq!(setup_opts(&cli, None).log_file, None);
    assert!(Cli::try_parse_from(["medialink", "--no-log-file", "--log-file", "a.log"]).is_err());
}
