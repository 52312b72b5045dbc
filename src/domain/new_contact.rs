use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_name::ContactName;

/// A validated signup that has not been assigned an id or timestamp yet.
pub struct NewContact {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: String,
}
