//! Directory tree printer
//!
//! Prints directories and symbolic links as an indented tree. Plain files are
//! never shown and links are never followed.

use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

const INDENT: &str = "|   ";
const BRANCH: &str = "|-- ";

/// Format one tree line.
///
/// Depth 0 prints `label` as given; deeper lines get `depth - 1` indent
/// units followed by a branch marker.
pub fn format_leaf(label: &str, depth: usize) -> String {
    if depth == 0 {
        return label.to_string();
    }
    format!("{}{}{}", INDENT.repeat(depth - 1), BRANCH, label)
}

/// Streams a directory tree to a writer.
///
/// Unreadable directories and links are reported inline and skipped; only
/// failures of the writer itself are returned.
pub struct TreePrinter<W: Write> {
    out: W,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the tree rooted at `root`, which is shown verbatim on the first line
    pub fn print(&mut self, root: &Path) -> io::Result<()> {
        self.print_dir(root, &root.display().to_string(), 0)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_dir(&mut self, path: &Path, label: &str, depth: usize) -> io::Result<()> {
        let entries = match read_sorted(path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "cannot list directory");
                return writeln!(self.out, "error reading {}: {}", path.display(), err);
            }
        };

        self.leaf(label, depth)?;

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    writeln!(self.out, "error reading {}: {}", entry.path().display(), err)?;
                    continue;
                }
            };

            if file_type.is_symlink() {
                match fs::read_link(entry.path()) {
                    Ok(target) => self.leaf(&format!("{} -> {}", name, target.display()), depth + 1)?,
                    Err(err) => writeln!(self.out, "error reading link: {err}")?,
                }
            } else if file_type.is_dir() {
                self.print_dir(&entry.path(), &name, depth + 1)?;
            }
        }

        Ok(())
    }

    fn leaf(&mut self, label: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}", format_leaf(label, depth))
    }
}

/// Immediate entries of `path`, sorted by file name
fn read_sorted(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(root: &Path) -> String {
        let mut printer = TreePrinter::new(Vec::new());
        printer.print(root).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_format_leaf() {
        assert_eq!(format_leaf("photos/2024", 0), "photos/2024");
        assert_eq!(format_leaf("day1", 1), "|-- day1");
        assert_eq!(format_leaf("raw", 2), "|   |-- raw");
        assert_eq!(format_leaf("x", 3), "|   |   |-- x");
    }

    #[test]
    fn test_nested_directories_skip_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir(root.join("a")).unwrap();
        fs::write(root.join("file.txt"), "x").unwrap();
        fs::write(root.join("b/inner/deep.jpg"), "x").unwrap();

        let expected = format!("{}\n|-- a\n|-- b\n|   |-- inner\n", root.display());
        assert_eq!(render(root), expected);
    }

    #[test]
    fn test_empty_directory_prints_root_only() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(render(temp_dir.path()), format!("{}\n", temp_dir.path().display()));
    }

    /// Collects output and deletes `victim` once `trigger` has been written
    struct RemoveAfter {
        buf: Vec<u8>,
        trigger: &'static str,
        victim: std::path::PathBuf,
    }

    impl Write for RemoveAfter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            if self.victim.exists() && String::from_utf8_lossy(&self.buf).contains(self.trigger) {
                fs::remove_dir_all(&self.victim)?;
            }
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unreadable_subdirectory_keeps_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("c/deeper")).unwrap();

        let mut printer = TreePrinter::new(RemoveAfter {
            buf: Vec::new(),
            trigger: "|-- a\n",
            victim: root.join("b"),
        });
        printer.print(root).unwrap();
        let output = String::from_utf8(printer.into_inner().buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], root.display().to_string());
        assert_eq!(lines[1], "|-- a");
        assert!(lines[2].starts_with(&format!("error reading {}: ", root.join("b").display())));
        assert_eq!(lines[3], "|-- c");
        assert_eq!(lines[4], "|   |-- deeper");
    }

    #[test]
    fn test_unreadable_root_reports_inline() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let output = render(&missing);
        assert!(output.starts_with(&format!("error reading {}: ", missing.display())));
        assert_eq!(output.lines().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_printed_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("sub1")).unwrap();
        fs::create_dir(root.join("sub2")).unwrap();
        fs::create_dir(root.join("sub1/nested")).unwrap();
        fs::write(root.join("file.txt"), "x").unwrap();
        std::os::unix::fs::symlink("/tmp", root.join("link")).unwrap();
        std::os::unix::fs::symlink(root.join("sub1"), root.join("sub2/back")).unwrap();

        let expected = format!(
            "{}\n|-- link -> /tmp\n|-- sub1\n|   |-- nested\n|-- sub2\n|   |-- back -> {}\n",
            root.display(),
            root.join("sub1").display()
        );
        assert_eq!(render(root), expected);
    }
}
