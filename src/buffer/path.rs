//! Path-join overwrite operations.
//!
//! Joining inserts exactly one host separator between the directory and the
//! file name: never doubled when the directory already ends with one or the
//! file name already starts with one, and never prepended when the directory
//! is empty.

use super::Buffer;

/// Host path separator.
#[cfg(windows)]
const SEP: u8 = b'\\';
/// Host path separator.
#[cfg(not(windows))]
const SEP: u8 = b'/';

impl Buffer {
    /// Replace the content with `dir` joined to `fname`.
    ///
    /// An empty `dir` yields just `fname`; an empty `fname` yields `dir`
    /// unchanged, with no trailing separator added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.set_path("/a/b/", "c");
    /// assert_eq!(buf.as_str(), "/a/b/c");
    /// ```
    #[inline]
    pub fn set_path(&mut self, dir: &str, fname: &str) {
        self.set_path_bytes(dir.as_bytes(), fname.as_bytes());
    }

    /// Byte-slice variant of [`set_path`](Buffer::set_path) for components
    /// that are not valid UTF-8.
    pub fn set_path_bytes(&mut self, dir: &[u8], fname: &[u8]) {
        self.reset();
        self.reserve_for(dir.len() + fname.len() + 1);
        if dir.is_empty() {
            self.push_bytes(fname);
            return;
        }
        self.push_bytes(dir);
        if fname.is_empty() {
            return;
        }
        let dir_sep = dir.last() == Some(&SEP);
        let fname_sep = fname.first() == Some(&SEP);
        match (dir_sep, fname_sep) {
            // Both carry a separator: keep the directory's, drop the other.
            (true, true) => self.push_bytes(&fname[1..]),
            (false, false) => {
                self.push_byte(SEP);
                self.push_bytes(fname);
            }
            _ => self.push_bytes(fname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/a/b", "c", "/a/b/c")]
    #[case("/a/b/", "c", "/a/b/c")]
    #[case("/a/b", "/c", "/a/b/c")]
    #[case("/a/b/", "/c", "/a/b/c")]
    #[case("", "c", "c")]
    #[case("", "/c", "/c")]
    #[case("/a/b", "", "/a/b")]
    #[case("", "", "")]
    fn test_set_path_cases(#[case] dir: &str, #[case] fname: &str, #[case] expected: &str) {
        let mut buf = Buffer::new();
        buf.set_path(dir, fname);
        assert_eq!(buf.as_str(), expected);
        assert_eq!(buf.len(), expected.len());
    }

    #[test]
    fn test_set_path_replaces_prior_content() {
        let mut buf = Buffer::from("stale content");
        buf.set_path("/tmp", "f.txt");
        assert_eq!(buf.as_str(), "/tmp/f.txt");
    }

    #[test]
    fn test_set_path_bytes_opaque() {
        let mut buf = Buffer::new();
        buf.set_path_bytes(b"/srv", b"\xffname");
        assert_eq!(buf.as_bytes(), b"/srv/\xffname");
    }
}
