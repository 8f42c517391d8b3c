use base::entities::OrderId;

pub const ADD_ORDER_LABEL: &str = "Add Order";
pub const UPDATE_ORDER_LABEL: &str = "Update Order";

/// Which order, if any, the form currently updates instead of creating a new
/// one. There is a single slot; a new edit request re-targets it.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(OrderId),
}

impl EditSession {
    pub fn begin(&mut self, id: OrderId) {
        *self = EditSession::Editing(id);
    }

    pub fn finish(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn editing_id(&self) -> Option<OrderId> {
        match *self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EditSession::Idle => ADD_ORDER_LABEL,
            EditSession::Editing(_) => UPDATE_ORDER_LABEL,
        }
    }
}
