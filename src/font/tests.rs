//! Tests for the font metadata reader.
//!
//! Fixtures are minimal hand-built sfnt and ttc buffers: a table
//! directory plus just enough of the `name` and `OS/2` tables for the
//! reader to decode. Outline tables are present-but-empty, since
//! classification only looks at the table directory.

use read_fonts::types::Tag;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

use super::classify::{CFF, CFF2, GLYF};
use super::{is_collection, list_members, read_face, FaceReadError, FontKind};

const TT_SFNT_VERSION: u32 = 0x0001_0000;

struct TableSpec {
    tag: Tag,
    data: Vec<u8>,
}

impl TableSpec {
    fn new(tag: Tag, data: Vec<u8>) -> Self {
        Self { tag, data }
    }

    fn empty(tag: Tag) -> Self {
        Self::new(tag, Vec::new())
    }
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// A version-0 `name` table from (platform, encoding, name ID, value)
/// entries. Platform 3 strings are encoded UTF-16BE, everything else as
/// raw bytes.
fn name_table(entries: &[(u16, u16, u16, &str)]) -> Vec<u8> {
    let mut storage = Vec::new();
    let mut records = Vec::new();
    for &(platform, encoding, name_id, value) in entries {
        let encoded: Vec<u8> = if platform == 3 {
            value.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
        } else {
            value.as_bytes().to_vec()
        };
        records.push((platform, encoding, name_id, storage.len() as u16, encoded.len() as u16));
        storage.extend_from_slice(&encoded);
    }

    let storage_offset = 6 + 12 * entries.len() as u16;
    let mut table = Vec::new();
    push_u16(&mut table, 0); // version
    push_u16(&mut table, entries.len() as u16);
    push_u16(&mut table, storage_offset);
    for (platform, encoding, name_id, offset, length) in records {
        push_u16(&mut table, platform);
        push_u16(&mut table, encoding);
        push_u16(&mut table, 0x0409); // language
        push_u16(&mut table, name_id);
        push_u16(&mut table, length);
        push_u16(&mut table, offset);
    }
    table.extend_from_slice(&storage);
    table
}

/// A version-0 `OS/2` table (78 bytes) with the given weight class.
fn os2_table(weight_class: u16) -> Vec<u8> {
    let mut table = vec![0u8; 78];
    table[4..6].copy_from_slice(&weight_class.to_be_bytes());
    table
}

/// The standard name entries used by most fixtures, all under the
/// Windows platform / Unicode BMP encoding the reader looks up.
fn standard_names(family: &str, full_name: &str, postscript: &str) -> Vec<u8> {
    name_table(&[
        (3, 1, 1, family),
        (3, 1, 2, "Regular"),
        (3, 1, 4, full_name),
        (3, 1, 5, "Version 1.000"),
        (3, 1, 6, postscript),
    ])
}

/// Serialize a table directory plus table data. Record offsets are
/// relative to the start of the final file, which begins `base_offset`
/// bytes before the directory (0 for single fonts, the header size for
/// collection members).
fn build_directory(tables: &[TableSpec], base_offset: u32) -> Vec<u8> {
    let mut tables: Vec<&TableSpec> = tables.iter().collect();
    tables.sort_by_key(|table| table.tag);

    let directory_len = 12 + 16 * tables.len() as u32;
    let mut buf = Vec::new();
    push_u32(&mut buf, TT_SFNT_VERSION);
    push_u16(&mut buf, tables.len() as u16);
    push_u16(&mut buf, 0); // searchRange
    push_u16(&mut buf, 0); // entrySelector
    push_u16(&mut buf, 0); // rangeShift

    let mut data_offset = base_offset + directory_len;
    for table in &tables {
        buf.extend_from_slice(&table.tag.to_be_bytes());
        push_u32(&mut buf, 0); // checksum
        push_u32(&mut buf, data_offset);
        push_u32(&mut buf, table.data.len() as u32);
        data_offset += table.data.len() as u32;
    }
    for table in &tables {
        buf.extend_from_slice(&table.data);
    }
    buf
}

fn build_font(tables: &[TableSpec]) -> Vec<u8> {
    build_directory(tables, 0)
}

/// A version-1 ttc wrapping one table directory per member.
fn build_collection(fonts: &[Vec<TableSpec>]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len() as u32;
    let mut directories = Vec::new();
    let mut offsets = Vec::new();
    let mut position = header_len;
    for tables in fonts {
        offsets.push(position);
        let directory = build_directory(tables, position);
        position += directory.len() as u32;
        directories.push(directory);
    }

    let mut buf = Vec::new();
    buf.extend_from_slice(b"ttcf");
    push_u16(&mut buf, 1); // majorVersion
    push_u16(&mut buf, 0); // minorVersion
    push_u32(&mut buf, fonts.len() as u32);
    for offset in offsets {
        push_u32(&mut buf, offset);
    }
    for directory in directories {
        buf.extend_from_slice(&directory);
    }
    buf
}

/// Write `data` to a file inside a fresh temp dir and return both.
fn write_fixture(name: &str, data: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(data).expect("write fixture");
    (dir, path)
}

#[test]
fn truetype_font_reads_all_fields() {
    let data = build_font(&[
        TableSpec::empty(GLYF),
        TableSpec::new(Tag::new(b"name"), standard_names("Foo", "Foo Regular", "Foo-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("foo.ttf", &data);

    let face = read_face(&path, None).expect("read face");
    assert_eq!(face.kind, FontKind::TrueType);
    assert_eq!(face.family.as_deref(), Some("Foo"));
    assert_eq!(face.subfamily.as_deref(), Some("Regular"));
    assert_eq!(face.weight_class, 400);
    assert_eq!(face.full_name.as_deref(), Some("Foo Regular"));
    assert_eq!(face.version.as_deref(), Some("Version 1.000"));
    assert_eq!(face.postscript_name.as_deref(), Some("Foo-Regular"));
    assert_eq!(face.canonical_name(), Some("Foo Regular"));
}

#[test]
fn cff_font_is_classified_and_copies_postscript_name() {
    let data = build_font(&[
        TableSpec::empty(CFF),
        TableSpec::new(Tag::new(b"name"), standard_names("Bar", "Bar Regular", "Bar-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(500)),
    ]);
    let (_dir, path) = write_fixture("bar.otf", &data);

    let face = read_face(&path, None).expect("read face");
    assert_eq!(face.kind, FontKind::Cff);
    assert_eq!(face.canonical_name(), Some("Bar-Regular"));
}

#[test]
fn cff2_counts_as_cff() {
    let data = build_font(&[
        TableSpec::empty(CFF2),
        TableSpec::new(Tag::new(b"name"), standard_names("Var", "Var Regular", "Var-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("var.otf", &data);
    assert_eq!(read_face(&path, None).expect("read face").kind, FontKind::Cff);
}

#[test]
fn glyf_takes_priority_over_cff() {
    let data = build_font(&[
        TableSpec::empty(CFF),
        TableSpec::empty(GLYF),
        TableSpec::new(Tag::new(b"name"), standard_names("Mix", "Mix Regular", "Mix-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("mix.ttf", &data);

    let face = read_face(&path, None).expect("read face");
    assert_eq!(face.kind, FontKind::TrueType);
    assert_eq!(face.canonical_name(), Some("Mix Regular"));
}

#[test]
fn neither_outline_table_is_unknown_with_no_canonical_name() {
    let data = build_font(&[
        TableSpec::new(Tag::new(b"name"), standard_names("Odd", "Odd Regular", "Odd-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("odd.ttf", &data);

    let face = read_face(&path, None).expect("read face");
    assert_eq!(face.kind, FontKind::Unknown);
    assert_eq!(face.canonical_name(), None);
}

#[test]
fn name_lookup_does_not_fall_back_to_other_platforms() {
    // Family only exists under the Mac platform; the 3/1 policy must
    // yield None for it while still finding the 3/1 entries.
    let names = name_table(&[
        (1, 0, 1, "MacOnly"),
        (3, 1, 4, "Partial Regular"),
    ]);
    let data = build_font(&[
        TableSpec::empty(GLYF),
        TableSpec::new(Tag::new(b"name"), names),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("partial.ttf", &data);

    let face = read_face(&path, None).expect("read face");
    assert_eq!(face.family, None);
    assert_eq!(face.subfamily, None);
    assert_eq!(face.full_name.as_deref(), Some("Partial Regular"));
}

fn two_member_collection() -> Vec<u8> {
    build_collection(&[
        vec![
            TableSpec::empty(GLYF),
            TableSpec::new(Tag::new(b"name"), standard_names("First", "First Regular", "First-Regular")),
            TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
        ],
        vec![
            TableSpec::empty(GLYF),
            TableSpec::new(Tag::new(b"name"), standard_names("Second", "Second Bold", "Second-Bold")),
            TableSpec::new(Tag::new(b"OS/2"), os2_table(700)),
        ],
    ])
}

#[test]
fn collection_members_enumerate_in_container_order() {
    let (_dir, path) = write_fixture("pair.ttc", &two_member_collection());

    assert!(is_collection(&path).expect("probe"));
    let members = list_members(&path).expect("list members");
    assert_eq!(members, vec!["First Regular", "Second Bold"]);
}

#[test]
fn collection_member_reads_its_own_fields() {
    let (_dir, path) = write_fixture("pair.ttc", &two_member_collection());

    let first = read_face(&path, Some(0)).expect("read member 0");
    assert_eq!(first.family.as_deref(), Some("First"));
    assert_eq!(first.weight_class, 400);

    let second = read_face(&path, Some(1)).expect("read member 1");
    assert_eq!(second.family.as_deref(), Some("Second"));
    assert_eq!(second.weight_class, 700);
}

#[test]
fn collection_index_out_of_range_fails() {
    let (_dir, path) = write_fixture("pair.ttc", &two_member_collection());

    match read_face(&path, Some(2)) {
        Err(FaceReadError::IndexOutOfRange { index: 2, count: 2 }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn single_font_is_not_a_collection() {
    let data = build_font(&[
        TableSpec::empty(GLYF),
        TableSpec::new(Tag::new(b"name"), standard_names("Solo", "Solo Regular", "Solo-Regular")),
        TableSpec::new(Tag::new(b"OS/2"), os2_table(400)),
    ]);
    let (_dir, path) = write_fixture("solo.ttf", &data);
    assert!(!is_collection(&path).expect("probe"));
}

#[test]
fn short_file_is_not_a_collection() {
    let (_dir, path) = write_fixture("tiny.ttf", b"tt");
    assert!(!is_collection(&path).expect("probe"));
}

#[test]
fn missing_file_is_a_file_access_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nothing.ttf");
    match read_face(&path, None) {
        Err(FaceReadError::FileAccess { .. }) => {}
        other => panic!("expected FileAccess, got {other:?}"),
    }
}

#[test]
fn garbage_bytes_are_a_format_error() {
    let (_dir, path) = write_fixture("junk.ttf", b"this is not a font at all");
    match read_face(&path, None) {
        Err(FaceReadError::Format(_)) => {}
        other => panic!("expected Format, got {other:?}"),
    }
}
