pub mod m202506010001_create_marathons;
pub mod m202506010002_create_registrations;
