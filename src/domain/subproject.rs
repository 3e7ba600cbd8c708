use std::fmt;

/// One of the two independently installed halves of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subproject {
    Backend,
    Frontend,
}

impl Subproject {
    /// Installation order.
    pub const ALL: [Subproject; 2] = [Subproject::Backend, Subproject::Frontend];

    pub fn name(self) -> &'static str {
        match self {
            Subproject::Backend => "backend",
            Subproject::Frontend => "frontend",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Subproject::Backend => "Backend",
            Subproject::Frontend => "Frontend",
        }
    }
}

impl fmt::Display for Subproject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
