/// Key search predicate. Matching is byte-wise and case-sensitive;
/// an empty needle matches every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Prefix(String),
    Suffix(String),
}

impl Criterion {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Criterion::Prefix(p) => key.starts_with(p.as_str()),
            Criterion::Suffix(s) => key.ends_with(s.as_str()),
        }
    }

    pub fn needle(&self) -> &str {
        match self {
            Criterion::Prefix(s) | Criterion::Suffix(s) => s,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Prefix(_) => "prefix",
            Criterion::Suffix(_) => "suffix",
        }
    }
}
