use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct List<T> {
    list: Vec<T>,
    total: usize,
}

impl<T> List<T> {
    pub fn new(list: Vec<T>) -> Self {
        let total = list.len();
        List { list, total }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub token: String,
}
