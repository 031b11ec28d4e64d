use std::path::Path;

use anyhow::Context;
use codec::{CaesarReader, CaesarWriter, Offset};

/// Write a few sample lines with offset 0 to `file`, then decode them again.
pub fn run(file: &Path) -> anyhow::Result<Vec<String>> {
    let mut writer = CaesarWriter::create(file, Some(Offset::from(0)))
        .with_context(|| format!("Failed to create {:?}", file))?;
    writer.write("First line\n")?;
    writer.write("This is the second line")?;
    writer.write(" This is also the second line")?;
    writer.write("\nA third line because why not? ")?;
    writer.write("And som\u{ea} sp\u{20ac}ci\u{e0}l ch@rs\u{a7}")?;
    writer.close().context("Failed to flush demo file")?;

    tracing::debug!("Wrote demo file {:?}", file);

    let mut reader =
        CaesarReader::open(file).with_context(|| format!("Failed to open {:?}", file))?;
    let lines = reader
        .readlines()
        .with_context(|| format!("Failed to read back {:?}", file))?;

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_demo_reads_back_three_lines() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("target")
            .join("_tempfs")
            .join(uuid::Uuid::new_v4().to_string());
        std::fs::create_dir_all(&dir).unwrap();

        let lines = run(&dir.join("demo.enc")).unwrap();

        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "First line\n");
        assert_eq!(
            lines[1],
            "This is the second line This is also the second line\n"
        );
        assert!(lines[2].starts_with("A third line"));
    }
}
