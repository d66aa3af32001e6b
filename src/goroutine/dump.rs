//! Dump input handling: gzip decompression and text/binary dispatch.

use flate2::read::GzDecoder;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Gzip stream magic bytes
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// The literal every text-mode goroutine dump contains
const STACK_MARKER: &[u8] = b"goroutine ";

/// A dump after decompression, tagged by how it can be consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpKind {
    /// Text stack dump, ready for the classifier
    Text(String),

    /// Binary pprof data; summarization must be delegated to the renderer
    Binary,
}

/// Read a dump file, transparently handling gzip, and sniff its kind
pub fn load_dump(path: &Path) -> io::Result<DumpKind> {
    let raw = fs::read(path)?;
    let raw = if raw.starts_with(&GZIP_MAGIC) {
        debug!("gzip magic found, decompressing {}", path.display());
        let mut decompressed = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut decompressed)?;
        decompressed
    } else {
        raw
    };

    Ok(sniff_dump(&raw))
}

/// Decide whether a decompressed dump is a text stack dump or binary pprof
///
/// Text dumps always carry the `goroutine ` marker and newline-delimited
/// structure; anything else must be handed to `go tool pprof`.
pub fn sniff_dump(raw: &[u8]) -> DumpKind {
    let has_marker = raw
        .windows(STACK_MARKER.len())
        .any(|window| window == STACK_MARKER);

    if has_marker && raw.contains(&b'\n') {
        DumpKind::Text(String::from_utf8_lossy(raw).into_owned())
    } else {
        DumpKind::Binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const TEXT_DUMP: &str = "goroutine 1 [running]:\nmain.main()\n\t/app/main.go:10\n";

    #[test]
    fn test_sniff_text_dump() {
        match sniff_dump(TEXT_DUMP.as_bytes()) {
            DumpKind::Text(text) => assert_eq!(text, TEXT_DUMP),
            DumpKind::Binary => panic!("expected text dump"),
        }
    }

    #[test]
    fn test_sniff_binary_dump() {
        // pprof protobuf data: no marker, no line structure
        assert_eq!(sniff_dump(&[0x0a, 0x04, 0x01, 0x02]), DumpKind::Binary);
    }

    #[test]
    fn test_marker_without_newline_is_binary() {
        assert_eq!(sniff_dump(b"goroutine 1 [running]:"), DumpKind::Binary);
    }

    #[test]
    fn test_load_dump_gunzips() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(TEXT_DUMP.as_bytes()).unwrap();
        let gzipped = encoder.finish().unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), &gzipped).unwrap();

        match load_dump(file.path()).unwrap() {
            DumpKind::Text(text) => assert_eq!(text, TEXT_DUMP),
            DumpKind::Binary => panic!("expected text dump after gunzip"),
        }
    }
}
