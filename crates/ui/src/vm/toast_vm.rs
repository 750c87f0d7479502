use portal_core::model::Notification;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl ToastVm {
    #[must_use]
    pub fn from_notification(id: u64, notification: &Notification) -> Self {
        Self {
            id,
            title: notification.title().to_owned(),
            description: notification.description().to_owned(),
        }
    }
}
