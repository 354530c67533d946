// Seed words and candidate provenance

/// Separator between sub-tokens of a composite seed word ("Alice:Bob").
pub const COMPOSITE_SEPARATOR: char = ':';

/// Maximum number of seed words combined into one candidate.
pub const MAX_PROVENANCE: usize = 3;

/// Opaque identity of a seed word.
///
/// Equal seed strings share one id (the position of their first occurrence
/// in the caller's list), so reuse exclusion works on the original seed
/// rather than on any rendered form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeedId(pub u32);

impl SeedId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A caller-supplied seed word.
///
/// A seed may be a colon-separated composite; it still counts as a single
/// identity, and the forms of all its sub-tokens are pooled under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedWord {
    pub id: SeedId,
    pub text: String,
}

impl SeedWord {
    pub fn new(id: SeedId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Split into sub-tokens. A seed without a separator yields itself.
    pub fn sub_tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split(COMPOSITE_SEPARATOR)
    }

    pub fn is_composite(&self) -> bool {
        self.text.contains(COMPOSITE_SEPARATOR)
    }
}

/// Ordered list of the distinct seed identities that contributed to a
/// candidate, most recently prepended first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Provenance {
    ids: [SeedId; MAX_PROVENANCE],
    len: u8,
}

impl Provenance {
    /// Provenance of a one-word candidate.
    pub fn single(id: SeedId) -> Self {
        let mut ids = [SeedId::default(); MAX_PROVENANCE];
        ids[0] = id;
        Self { ids, len: 1 }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[SeedId] {
        &self.ids[..self.len()]
    }

    pub fn first(&self) -> Option<SeedId> {
        self.as_slice().first().copied()
    }

    pub fn contains(&self, id: SeedId) -> bool {
        self.as_slice().contains(&id)
    }

    /// Keep only the first `n` entries.
    pub fn prefix(mut self, n: usize) -> Self {
        self.len = self.len.min(n.min(MAX_PROVENANCE) as u8);
        self
    }

    /// Prepend `id`, or `None` if it is already present or the list is full.
    pub fn with_front(&self, id: SeedId) -> Option<Self> {
        if self.contains(id) || self.len() >= MAX_PROVENANCE {
            return None;
        }
        let mut ids = [SeedId::default(); MAX_PROVENANCE];
        ids[0] = id;
        ids[1..=self.len()].copy_from_slice(self.as_slice());
        Some(Self {
            ids,
            len: self.len + 1,
        })
    }
}
