use std::{
    fmt, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use crate::error::{ImportError, Result};

const ZONE_FILE_SUFFIX: &str = ".db";

// Only absolute origins count: the name must end in a dot, followed by
// whitespace, a comment or the end of the line. The dot is not captured.
static ORIGIN_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\$ORIGIN\s+([\w.]+)\.(?:\s|;|$)").expect("origin pattern is valid")
});

static DOMAIN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w-]+(?:\.[\w-]+)*$").expect("domain pattern is valid")
});

/// A dot separated host name without the trailing root dot. Labels hold
/// word characters and `-` only, so a name is always a single URL path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(String);

impl Domain {
    pub fn parse(name: &str) -> Option<Self> {
        DOMAIN_NAME
            .is_match(name)
            .then(|| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A zone file read fully into memory. The content is forwarded to the
/// provider untouched.
#[derive(Debug)]
pub struct ZoneFile {
    path: PathBuf,
    content: String,
}

impl ZoneFile {
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| ImportError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Works out which domain this zone file describes, trying the file name
    /// first and the `$ORIGIN` directive second.
    pub fn domain(&self) -> Result<Domain> {
        domain_from_filename(&self.path)
            .or_else(|| domain_from_origin(&self.content))
            .ok_or_else(|| ImportError::DomainNotFound {
                path: self.path.clone(),
            })
    }
}

/// `/zones/example.com.db` -> `example.com`
///
/// Only the exact `.db` suffix is removed, so `web.db` stays `web`.
pub fn domain_from_filename(path: &Path) -> Option<Domain> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(ZONE_FILE_SUFFIX)?;
    Domain::parse(stem)
}

/// Returns the domain of the first `$ORIGIN` line, if any.
pub fn domain_from_origin(content: &str) -> Option<Domain> {
    content
        .lines()
        .find_map(|line| ORIGIN_DIRECTIVE.captures(line))
        .and_then(|captures| Domain::parse(&captures[1]))
}
