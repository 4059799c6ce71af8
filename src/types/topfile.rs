use indexmap::IndexMap;

/// Role under which every target is listed when no roles are requested
pub const WILDCARD_ROLE: &str = "*";

/// Prefix marking a target as a regular expression node matcher
pub const PATTERN_PREFIX: &str = "E@";

/// Role -> targets declaring that role, in topfile order
pub type TargetsByRole = IndexMap<String, Vec<String>>;

/// Role -> target -> nodes selected by that target
pub type RoleNodeDict = IndexMap<String, IndexMap<String, Vec<String>>>;

/// The `base` section of a topfile: target identifier -> roles.
///
/// Targets keep the order they were written in the document, which is the
/// order every query reports them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopfileData {
    targets: IndexMap<String, Vec<String>>,
}

impl TopfileData {
    pub fn new(targets: IndexMap<String, Vec<String>>) -> Self {
        Self { targets }
    }

    /// Target identifiers in document order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Targets paired with their role lists, in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.targets
            .iter()
            .map(|(target, roles)| (target.as_str(), roles.as_slice()))
    }

    pub(crate) fn roles_for(&self, target: &str) -> Option<&[String]> {
        self.targets.get(target).map(Vec::as_slice)
    }

    pub fn has_role(&self, target: &str, role: &str) -> bool {
        self.roles_for(target)
            .is_some_and(|roles| roles.iter().any(|r| r == role))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<T, R> FromIterator<(T, Vec<R>)> for TopfileData
where
    T: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, Vec<R>)>>(iter: I) -> Self {
        let targets = iter
            .into_iter()
            .map(|(target, roles)| {
                (
                    target.into(),
                    roles.into_iter().map(Into::into).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { targets }
    }
}
