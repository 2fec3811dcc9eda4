use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One busy flag per mutating operation kind.
///
/// A flag is set while a request of that kind is outstanding and cleared
/// when the request settles, whatever the outcome. The gate never queues
/// work: callers check [`OperationGate::try_begin`] and drop the action when
/// the kind is already busy, and the shell greys out the matching control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationGate {
    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,
}

impl OperationGate {
    pub fn is_busy(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::Create => self.creating,
            OperationKind::Update => self.updating,
            OperationKind::Delete => self.deleting,
        }
    }

    pub fn begin(&mut self, kind: OperationKind) {
        *self.flag_mut(kind) = true;
    }

    /// Sets the flag for `kind` unless it is already set.
    ///
    /// Returns `false` when a request of that kind is still in flight.
    pub fn try_begin(&mut self, kind: OperationKind) -> bool {
        if self.is_busy(kind) {
            return false;
        }
        self.begin(kind);
        true
    }

    pub fn end(&mut self, kind: OperationKind) {
        *self.flag_mut(kind) = false;
    }

    fn flag_mut(&mut self, kind: OperationKind) -> &mut bool {
        match kind {
            OperationKind::Create => &mut self.creating,
            OperationKind::Update => &mut self.updating,
            OperationKind::Delete => &mut self.deleting,
        }
    }
}
