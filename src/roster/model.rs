/// A single person entry in the roster.
///
/// The id is assigned by the repository on creation and never changes
/// afterwards. All other fields are overwritten wholesale by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub salary: f64,
    /// `"M"`, `"F"`, or empty for legacy rows that predate the field.
    pub gender: String,
}

/// The mutable portion of a record, shared by add and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub salary: f64,
    pub gender: String,
}

impl Record {
    pub fn new(id: u32, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            age: fields.age,
            salary: fields.salary,
            gender: fields.gender,
        }
    }

    /// Copies the mutable fields back out, used when merging a partial
    /// update against the stored values.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            salary: self.salary,
            gender: self.gender.clone(),
        }
    }
}
