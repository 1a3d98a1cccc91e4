//! Built-in signature catalogue
//!
//! Order matters: lookup is first-match-wins, so a record must come before
//! any shorter record it shares a prefix with (`ftypheic` before `ftyp`,
//! RIFF subtypes before bare `RIFF`, `BM` near the end).
//!
//! Most entries follow Gary Kessler's file signature table.

use crate::domain::entities::SignatureRecord;

pub(crate) const BUILTIN_SIGNATURES: &[SignatureRecord] = &[
    // Images
    SignatureRecord::new("GIF89a Image", &["gif"], b"GIF89a"),
    SignatureRecord::new("GIF87a Image", &["gif"], b"GIF87a"),
    SignatureRecord::new(
        "PNG Image",
        &["png"],
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
    ),
    SignatureRecord::new("JPEG Image", &["jpg", "jpeg", "jpe", "jfif"], &[0xFF, 0xD8, 0xFF]),
    SignatureRecord::new(
        "JPEG 2000 Image",
        &["jp2", "j2k", "jpf"],
        &[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A],
    ),
    SignatureRecord::new("JPEG XL Image", &["jxl"], &[0xFF, 0x0A]),
    SignatureRecord::new("TIFF Image (little-endian)", &["tif", "tiff"], &[0x49, 0x49, 0x2A, 0x00]),
    SignatureRecord::new("TIFF Image (big-endian)", &["tif", "tiff"], &[0x4D, 0x4D, 0x00, 0x2A]),
    SignatureRecord::new("Windows Icon", &["ico"], &[0x00, 0x00, 0x01, 0x00]),
    SignatureRecord::new("Windows Cursor", &["cur"], &[0x00, 0x00, 0x02, 0x00]),
    SignatureRecord::new("Photoshop Document", &["psd"], b"8BPS"),
    SignatureRecord::new("WebP Image", &["webp"], b"WEBPVP8").at_offset(8),
    SignatureRecord::new("HEIC Image", &["heic"], b"ftypheic").at_offset(4),
    SignatureRecord::new("HEIF Image", &["heif"], b"ftypmif1").at_offset(4),
    SignatureRecord::new("AVIF Image", &["avif"], b"ftypavif").at_offset(4),
    SignatureRecord::new("DICOM Medical Image", &["dcm"], b"DICM").at_offset(128),
    // Audio and video
    SignatureRecord::new("WAVE Audio", &["wav"], b"WAVEfmt ").at_offset(8),
    SignatureRecord::new("AVI Video", &["avi"], b"AVI LIST").at_offset(8),
    SignatureRecord::new("MPEG-4 Audio", &["m4a"], b"ftypM4A ").at_offset(4),
    SignatureRecord::new("QuickTime Movie", &["mov"], b"ftypqt  ").at_offset(4),
    SignatureRecord::new("MPEG-4 Video", &["mp4", "m4v"], b"ftypisom").at_offset(4),
    SignatureRecord::new("MPEG-4 Video", &["mp4", "m4v"], b"ftypmp42").at_offset(4),
    SignatureRecord::new("3GPP Multimedia", &["3gp"], b"ftyp3gp").at_offset(4),
    SignatureRecord::new("ISO Base Media File", &["mp4", "m4v", "mov"], b"ftyp").at_offset(4),
    SignatureRecord::new("RIFF Container", &["riff"], b"RIFF"),
    SignatureRecord::new("Matroska Media", &["mkv", "webm", "mka"], &[0x1A, 0x45, 0xDF, 0xA3]),
    SignatureRecord::new("Flash Video", &["flv"], &[0x46, 0x4C, 0x56, 0x01]),
    SignatureRecord::new("MP3 Audio (ID3 tagged)", &["mp3"], b"ID3"),
    SignatureRecord::new("FLAC Audio", &["flac"], b"fLaC"),
    SignatureRecord::new("Ogg Container", &["ogg", "oga", "ogv", "opus"], b"OggS"),
    SignatureRecord::new("MIDI Audio", &["mid", "midi"], b"MThd"),
    // Archives and compression
    SignatureRecord::new(
        "ZIP Archive",
        &["zip", "jar", "apk", "docx", "xlsx", "pptx", "odt", "epub"],
        &[0x50, 0x4B, 0x03, 0x04],
    ),
    SignatureRecord::new("ZIP Archive (empty)", &["zip"], &[0x50, 0x4B, 0x05, 0x06]),
    SignatureRecord::new("ZIP Archive (spanned)", &["zip"], &[0x50, 0x4B, 0x07, 0x08]),
    SignatureRecord::new(
        "RAR Archive v5",
        &["rar"],
        &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
    ),
    SignatureRecord::new("RAR Archive", &["rar"], &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
    SignatureRecord::new("7-Zip Archive", &["7z"], &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
    SignatureRecord::new("GZIP Archive", &["gz", "tgz"], &[0x1F, 0x8B, 0x08]),
    SignatureRecord::new("BZIP2 Archive", &["bz2", "tbz2"], b"BZh"),
    SignatureRecord::new("XZ Archive", &["xz", "txz"], &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
    SignatureRecord::new("Zstandard Frame", &["zst"], &[0x28, 0xB5, 0x2F, 0xFD]),
    SignatureRecord::new("LZ4 Frame", &["lz4"], &[0x04, 0x22, 0x4D, 0x18]),
    SignatureRecord::new("Microsoft Cabinet", &["cab"], b"MSCF"),
    SignatureRecord::new("Unix Archive", &["a", "ar", "deb"], b"!<arch>\n"),
    SignatureRecord::new("RPM Package", &["rpm"], &[0xED, 0xAB, 0xEE, 0xDB]),
    SignatureRecord::new("Tape Archive", &["tar"], b"ustar").at_offset(257),
    SignatureRecord::new("ISO-9660 Disc Image", &["iso"], b"CD001").at_offset(32769),
    // Documents and data
    SignatureRecord::new("PDF Document", &["pdf"], b"%PDF-"),
    SignatureRecord::new("PostScript Document", &["ps", "eps"], b"%!PS"),
    SignatureRecord::new("Rich Text Format", &["rtf"], b"{\\rtf1"),
    SignatureRecord::new(
        "Microsoft Office Compound Document",
        &["doc", "xls", "ppt", "msi", "msg"],
        &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
    ),
    SignatureRecord::new("SQLite Database", &["sqlite", "db"], b"SQLite format 3\0"),
    SignatureRecord::new("Apache Parquet", &["parquet"], b"PAR1"),
    // Fonts
    SignatureRecord::new("WOFF Font", &["woff"], b"wOFF"),
    SignatureRecord::new("WOFF2 Font", &["woff2"], b"wOF2"),
    SignatureRecord::new("OpenType Font", &["otf"], b"OTTO"),
    SignatureRecord::new("TrueType Font", &["ttf"], &[0x00, 0x01, 0x00, 0x00, 0x00]),
    // Executables
    SignatureRecord::new("ELF Executable", &["elf", "so", "o"], &[0x7F, 0x45, 0x4C, 0x46]),
    SignatureRecord::new("WebAssembly Binary", &["wasm"], &[0x00, 0x61, 0x73, 0x6D]),
    SignatureRecord::new("Mach-O Binary (32-bit)", &["dylib"], &[0xFE, 0xED, 0xFA, 0xCE]),
    SignatureRecord::new("Mach-O Binary (64-bit)", &["dylib"], &[0xFE, 0xED, 0xFA, 0xCF]),
    SignatureRecord::new("Mach-O Binary (32-bit, reversed)", &["dylib"], &[0xCE, 0xFA, 0xED, 0xFE]),
    SignatureRecord::new("Mach-O Binary (64-bit, reversed)", &["dylib"], &[0xCF, 0xFA, 0xED, 0xFE]),
    // Also the Mach-O universal binary magic; Java wins the tie.
    SignatureRecord::new("Java Class File", &["class"], &[0xCA, 0xFE, 0xBA, 0xBE]),
    SignatureRecord::new("DOS/Windows Executable", &["exe", "dll", "sys", "scr"], b"MZ"),
    // "BM" also starts plenty of plain text
    SignatureRecord::new("Bitmap Image", &["bmp", "dib"], b"BM"),
];
