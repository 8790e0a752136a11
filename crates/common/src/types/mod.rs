use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of a successful operation that returns no record.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}
