use super::{Classification, ClassifiedEntry, PackageEntry};
use std::iter::Enumerate;
use std::str::Lines;

/// Prefix of the first line of an annotation block.
const VIA_PREFIX: &str = "# via";

enum ScanState {
    /// Between pins, or after a pin's annotation block closed.
    Idle,
    /// A pin was just read; the next line decides whether a block opens.
    Pinned(PackageEntry),
    /// Inside the contiguous comment block that follows a pin.
    Annotations { entry: PackageEntry, direct: bool },
}

/// Lazy, single-pass classification of a requirements file.
///
/// Yields one [`ClassifiedEntry`] per pin, in file order, as soon as the pin's
/// annotation block has been fully read. Lines that do not fit the expected
/// shapes are skipped without error.
pub struct ClassifiedEntries<'a> {
    lines: Enumerate<Lines<'a>>,
    marker: &'a str,
    state: ScanState,
}

impl<'a> ClassifiedEntries<'a> {
    pub fn new(content: &'a str, marker: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
            marker,
            state: ScanState::Idle,
        }
    }

    fn step(&mut self, line: usize, raw: &str) -> Option<ClassifiedEntry> {
        let trimmed = raw.trim();

        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Pinned(entry) if trimmed.starts_with(VIA_PREFIX) => {
                let direct = trimmed.contains(self.marker);
                self.state = ScanState::Annotations { entry, direct };
                None
            }
            ScanState::Annotations { entry, direct } if trimmed.starts_with('#') => {
                let direct = direct || trimmed.contains(self.marker);
                self.state = ScanState::Annotations { entry, direct };
                None
            }
            ScanState::Pinned(entry) => {
                self.begin(line, raw);
                Some(self.finish(entry, false))
            }
            ScanState::Annotations { entry, direct } => {
                self.begin(line, raw);
                Some(self.finish(entry, direct))
            }
            ScanState::Idle => {
                self.begin(line, raw);
                None
            }
        }
    }

    fn begin(&mut self, line: usize, raw: &str) {
        if let Some(entry) = PackageEntry::parse(raw, line) {
            self.state = ScanState::Pinned(entry);
        }
    }

    fn finish(&self, entry: PackageEntry, direct: bool) -> ClassifiedEntry {
        tracing::debug!(
            package = %entry.name,
            version = %entry.pinned_version,
            line = entry.line,
            direct,
            "classified pin"
        );
        ClassifiedEntry::new(entry, direct)
    }
}

impl Iterator for ClassifiedEntries<'_> {
    type Item = ClassifiedEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((index, raw)) = self.lines.next() else {
                return match std::mem::replace(&mut self.state, ScanState::Idle) {
                    ScanState::Idle => None,
                    ScanState::Pinned(entry) => Some(self.finish(entry, false)),
                    ScanState::Annotations { entry, direct } => Some(self.finish(entry, direct)),
                };
            };

            if let Some(done) = self.step(index + 1, raw) {
                return Some(done);
            }
        }
    }
}

/// Classify every pin in `content` as direct or transitive.
pub fn classify(content: &str, marker: &str) -> Classification {
    Classification {
        marker: marker.to_string(),
        entries: ClassifiedEntries::new(content, marker).collect(),
    }
}

/// Names of the pins whose annotation block references `marker`, in file order.
pub fn direct_dependencies(content: &str, marker: &str) -> Vec<String> {
    ClassifiedEntries::new(content, marker)
        .filter(ClassifiedEntry::is_direct)
        .map(|e| e.entry.name)
        .collect()
}
