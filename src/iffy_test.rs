use std::fs;
use super::{
  error::PostError,
  iffy::{parse_domains, sheet_csv_url, update_domain_list, write_domain_list},
};

const SHEET: &str = "\"Name\",\"URL\",\"Score\"\n\
\"Bad News\",\"badnews.example\",\"0.1\"\n\
\"Comma, Inc\",\"comma.example\",\"0.2\"\n\
\"No URL\",\"\",\"0.3\"\n\
\n\
\"Quote \"\"Daily\"\"\",\"quotes.example\",\"0.4\"\n";

#[test]
fn iffy_test_sheet_csv_url() {
  assert_eq!(sheet_csv_url("abc123", "Iffy-news"),
    "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out:csv&sheet=Iffy-news");
}

#[test]
fn iffy_test_parse_domains() {
  let domains = parse_domains(SHEET, "URL").unwrap();
  assert_eq!(domains, vec!["badnews.example", "comma.example", "quotes.example"]);
}

#[test]
fn iffy_test_parse_unquoted() {
  let domains = parse_domains("URL,Name\na.example,A\nb.example,B\n", "URL").unwrap();
  assert_eq!(domains, vec!["a.example", "b.example"]);
}

#[test]
fn iffy_test_missing_column() {
  assert!(matches!(parse_domains(SHEET, "Domain"), Err(PostError::InvalidArgument(_))));
  assert!(matches!(parse_domains("", "URL"), Err(PostError::InvalidArgument(_))));
}

#[test]
fn iffy_test_write_domain_list() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy_list.txt");
  fs::write(&path, "old.example*\n").unwrap();

  write_domain_list(&path, &["a.example".to_string(), "b.example".to_string()]).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "a.example*\nb.example*\n");
  assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn iffy_test_empty_list_keeps_old_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy_list.txt");
  fs::write(&path, "old.example*\n").unwrap();

  assert!(write_domain_list(&path, &[]).is_err());
  assert_eq!(fs::read_to_string(&path).unwrap(), "old.example*\n");
}

#[test]
fn iffy_test_failed_update_keeps_old_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy_list.txt");
  fs::write(&path, "old.example*\n").unwrap();

  // header without the column
  assert!(update_domain_list("Name\nfoo\n", "URL", &path).is_err());
  assert_eq!(fs::read_to_string(&path).unwrap(), "old.example*\n");

  // unwritable target directory
  let missing = dir.path().join("nope").join("iffy_list.txt");
  assert!(matches!(write_domain_list(&missing, &["a.example".to_string()]), Err(PostError::Io(_))));
}

#[test]
fn iffy_test_update_domain_list() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy_list.txt");
  assert_eq!(update_domain_list(SHEET, "URL", &path).unwrap(), 3);
  assert_eq!(fs::read_to_string(&path).unwrap(),
    "badnews.example*\ncomma.example*\nquotes.example*\n");
}

#[test]
fn iffy_test_multiline_cell() {
  let csv = "\"Name\",\"URL\"\n\"Two\nLines\",\"a.example\"\n\"B\",\"b.example\"\n";
  let domains = parse_domains(csv, "URL").unwrap();
  assert_eq!(domains, vec!["a.example", "b.example"]);
}

#[test]
fn iffy_test_sibling_tmp_untouched() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy_list.txt");
  let sibling = dir.path().join("iffy_list.tmp");
  fs::write(&sibling, "someone else's file\n").unwrap();

  write_domain_list(&path, &["a.example".to_string()]).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "a.example*\n");
  assert_eq!(fs::read_to_string(&sibling).unwrap(), "someone else's file\n");
}

#[test]
fn iffy_test_target_named_tmp() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("iffy.tmp");
  fs::write(&path, "old.example*\n").unwrap();

  write_domain_list(&path, &["a.example".to_string(), "b.example".to_string()]).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "a.example*\nb.example*\n");
  // only the list itself is left in the directory
  assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

  assert!(write_domain_list(&path, &[]).is_err());
  assert_eq!(fs::read_to_string(&path).unwrap(), "a.example*\nb.example*\n");
}
