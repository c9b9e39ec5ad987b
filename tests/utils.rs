use chrono::NaiveDate;
use fileinv::FileRecord;
use fileinv::utils::{
    extension_of, extension_set, is_hidden, parse_extension_list, report_file_name,
    root_base_name,
};
use std::path::Path;

#[test]
fn test_extension_derivation_examples() {
    assert_eq!(extension_of("a.TAR.GZ"), ".gz");
    assert_eq!(extension_of("README"), "");
    assert!(is_hidden(".hidden"));
}

#[test]
fn test_record_extension_matches_helper() {
    for name in ["photo.JPEG", "Makefile", "x.y.z"] {
        assert_eq!(FileRecord::from_name(name).extension, extension_of(name));
    }
}

#[test]
fn test_extension_set_deduplicates_spellings() {
    let set = extension_set(["txt", ".txt", "TXT", " .Txt "]);
    assert_eq!(set.len(), 1);
    assert!(set.contains(".txt"));
}

#[test]
fn test_prompt_list_matches_flag_list() {
    let from_prompt = parse_extension_list("jpg, png");
    let from_flags = extension_set(["jpg", "png"]);
    assert_eq!(from_prompt, from_flags);
}

#[test]
fn test_root_base_name_ignores_trailing_separator() {
    assert_eq!(root_base_name(Path::new("/var/log/")), "log");
    assert_eq!(root_base_name(Path::new("relative/dir")), "dir");
}

#[test]
fn test_report_file_name_pads_day_and_month() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    assert_eq!(
        report_file_name(Path::new("/srv/media"), date),
        "media_02-01-2025.csv"
    );
}
