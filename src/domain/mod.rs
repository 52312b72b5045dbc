mod contact;
mod contact_email;
mod contact_name;
mod new_contact;

pub use contact::Contact;
pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use new_contact::NewContact;
