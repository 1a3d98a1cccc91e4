//! End-to-end classification tests against real files on disk.

use filemagic::{
    ClassifyFileUseCase, DetectError, Detector, DetectorConfig, ErrorKind, LocalFileSystem,
    SignatureRecord, SignatureTable, SizePolicy, classify,
};
use rstest::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TINY_GIF: [u8; 26] = [
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0x00, 0x2C, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x00, 0x3B,
];

/// Places `magic` at `offset` inside `len` zero bytes
fn padded(magic: &[u8], offset: usize, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len.max(offset + magic.len())];
    data[offset..offset + magic.len()].copy_from_slice(magic);
    data
}

#[fixture]
fn workdir() -> TempDir {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    TempDir::new().unwrap()
}

fn write(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[rstest]
fn test_tiny_gif(workdir: TempDir) {
    let path = write(&workdir, "tiny.gif", &TINY_GIF);
    let info = classify(&path).unwrap();

    assert_eq!(info.description(), "GIF89a Image");
    assert_eq!(info.extensions(), ["gif"]);
    assert_eq!(info.extension(), Some("gif"));
    assert_eq!(info.size(), 26);
    assert_eq!(info.name(), path.as_path());
}

#[rstest]
fn test_zero_bytes_are_unknown(workdir: TempDir) {
    let path = write(&workdir, "zeros.bin", &[0u8; 60]);
    let err = classify(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownType);
    assert_eq!(err.to_string(), "Unknown file type");
}

#[rstest]
#[case("png", padded(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], 0, 64), "PNG Image")]
#[case("jpg", padded(&[0xFF, 0xD8, 0xFF, 0xE0], 0, 64), "JPEG Image")]
#[case("pdf", padded(b"%PDF-1.7\n", 0, 64), "PDF Document")]
#[case("zip", padded(&[0x50, 0x4B, 0x03, 0x04], 0, 64), "ZIP Archive")]
#[case("elf", padded(&[0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01], 0, 64), "ELF Executable")]
#[case("gz", padded(&[0x1F, 0x8B, 0x08, 0x00], 0, 64), "GZIP Archive")]
#[case("7z", padded(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], 0, 64), "7-Zip Archive")]
#[case("wav", padded(b"RIFF\x24\x00\x00\x00WAVEfmt ", 0, 64), "WAVE Audio")]
#[case("webp", padded(b"RIFF\x24\x00\x00\x00WEBPVP8L", 0, 64), "WebP Image")]
#[case("riff", padded(b"RIFF\x24\x00\x00\x00CDXA", 0, 64), "RIFF Container")]
#[case("heic", padded(b"\x00\x00\x00\x18ftypheic", 0, 64), "HEIC Image")]
#[case("mp4", padded(b"\x00\x00\x00\x18ftypdash", 0, 64), "ISO Base Media File")]
#[case("tar", padded(b"ustar\x0000", 257, 512), "Tape Archive")]
#[case("bmp", padded(b"BM\x3A\x00", 0, 64), "Bitmap Image")]
fn test_builtin_formats(
    workdir: TempDir,
    #[case] ext: &str,
    #[case] data: Vec<u8>,
    #[case] expected: &str,
) {
    let path = write(&workdir, &format!("sample.{ext}"), &data);
    let info = classify(&path).unwrap();
    assert_eq!(info.description(), expected);
    assert_eq!(info.size(), data.len() as u64);
}

#[rstest]
fn test_iso9660_needs_full_prefix(workdir: TempDir) {
    let image = padded(b"CD001", 32769, 40 * 1024);
    let full = write(&workdir, "disc.iso", &image);
    assert_eq!(classify(&full).unwrap().description(), "ISO-9660 Disc Image");

    let cut = write(&workdir, "cut.iso", &image[..32770]);
    assert_eq!(classify(&cut).unwrap_err().kind(), ErrorKind::UnknownType);
}

// ============================================================================
// Validation order
// ============================================================================

#[rstest]
fn test_empty_path() {
    let err = classify("").unwrap_err();
    assert!(matches!(err, DetectError::MissingPath));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "File name not supplied");
}

#[rstest]
fn test_nonexistent_path(workdir: TempDir) {
    let err = classify(workdir.path().join("hopefully, this file does not really exist"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "File does not exist");
}

#[rstest]
fn test_path_through_a_file_is_not_found(workdir: TempDir) {
    let file = write(&workdir, "plain", &TINY_GIF);
    let err = classify(file.join("child")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[case::name_too_long("a".repeat(5000))]
#[case::interior_nul(String::from("bad\0path"))]
fn test_unstatable_path_is_not_found(workdir: TempDir, #[case] name: String) {
    let err = classify(workdir.path().join(name)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "File does not exist");
}

#[cfg(unix)]
#[rstest]
fn test_symlink_loop_is_not_found(workdir: TempDir) {
    use std::error::Error as _;
    use std::os::unix::fs::symlink;

    let a = workdir.path().join("a");
    let b = workdir.path().join("b");
    symlink(&b, &a).unwrap();
    symlink(&a, &b).unwrap();

    let err = classify(&a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let cause = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
    assert!(cause.is_some());
}

#[rstest]
fn test_directory(workdir: TempDir) {
    let err = classify(workdir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTarget);
    assert_eq!(err.to_string(), "Directory");
}

#[rstest]
fn test_empty_file(workdir: TempDir) {
    let path = write(&workdir, "empty", &[]);
    let err = classify(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyFile);
    assert_eq!(err.to_string(), "Empty file");
}

// ============================================================================
// Size policy
// ============================================================================

#[rstest]
fn test_default_policy_classifies_short_file(workdir: TempDir) {
    let path = write(&workdir, "stub.jpg", &[0xFF, 0xD8, 0xFF]);
    let info = classify(&path).unwrap();
    assert_eq!(info.description(), "JPEG Image");
    assert_eq!(info.size(), 3);
}

#[rstest]
fn test_legacy_policy_rejects_short_file(workdir: TempDir) {
    let path = write(&workdir, "stub.jpg", &[0xFF, 0xD8, 0xFF]);
    let use_case = ClassifyFileUseCase::new(DetectorConfig::legacy());
    let err = use_case.execute(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyFile);
    assert_eq!(err.to_string(), "File too small to test");

    let gif = write(&workdir, "tiny.gif", &TINY_GIF);
    assert_eq!(use_case.execute(&gif).unwrap().description(), "GIF89a Image");
}

#[rstest]
fn test_shortest_signature_policy_rejects_one_byte_file(workdir: TempDir) {
    let config = DetectorConfig::default().with_size_policy(SizePolicy::ShortestSignature);
    let use_case = ClassifyFileUseCase::new(config);

    let one = write(&workdir, "one", &[0x42]);
    match use_case.execute(&one).unwrap_err() {
        DetectError::TooSmall { size, minimum } => {
            assert_eq!(size, 1);
            assert_eq!(minimum, SignatureTable::builtin().min_window_len() as u64);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let bmp = write(&workdir, "two.bmp", b"BM");
    assert_eq!(use_case.execute(&bmp).unwrap().description(), "Bitmap Image");
}

// ============================================================================
// Determinism
// ============================================================================

#[rstest]
fn test_idempotent(workdir: TempDir) {
    let path = write(&workdir, "tiny.gif", &TINY_GIF);
    let first = classify(&path).unwrap();
    let second = classify(&path).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn test_concurrent_callers_agree(workdir: TempDir) {
    let path = write(&workdir, "tiny.gif", &TINY_GIF);
    let expected = classify(&path).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| classify(&path))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[rstest]
fn test_custom_table_precedence(workdir: TempDir) {
    let path = write(&workdir, "crafted", b"MAGIC-and-more");
    let broad = SignatureRecord::new("Broad", &["b"], b"MAG");
    let narrow = SignatureRecord::new("Narrow", &["n"], b"MAGIC-");

    let table = SignatureTable::new(vec![broad, narrow]);
    let detector = Detector::new(&table, LocalFileSystem);
    assert_eq!(detector.classify(&path).unwrap().description(), "Broad");

    let table = SignatureTable::new(vec![narrow, broad]);
    let detector = Detector::new(&table, LocalFileSystem);
    assert_eq!(detector.classify(&path).unwrap().description(), "Narrow");
}

#[rstest]
fn test_info_serializes(workdir: TempDir) {
    let path = write(&workdir, "tiny.gif", &TINY_GIF);
    let info = classify(&path).unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["description"], "GIF89a Image");
    assert_eq!(json["extensions"][0], "gif");
    assert_eq!(json["size"], 26);
}
