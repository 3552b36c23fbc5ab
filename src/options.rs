//! Settings for a generation run.

/// What to do when a derived name is reached a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Declare it again. Two differently-reachable nodes sharing a name
    /// produce two declarations.
    #[default]
    Emit,
    /// Keep the first declaration; later nodes with the same name are
    /// referenced but not declared.
    Skip,
}

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Overrides the root declaration's name. Without it the root is named
    /// after its title, or `unknown` if it has none.
    pub root_name: Option<String>,

    /// Mark declarations and fields public where the target supports it.
    /// Formatting only; the declaration list is unaffected.
    pub public: bool,

    pub duplicates: DuplicatePolicy,

    /// Maximum nesting of object/array levels below the root. Scalar leaves
    /// do not count.
    pub max_depth: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_name: None,
            public: false,
            duplicates: DuplicatePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
