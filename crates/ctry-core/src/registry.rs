//! # Registry
//!
//! [`Registry`] owns the canonical record list together with its indices.
//! It is built once and never mutated, so a shared `&Registry` can be read
//! from any number of threads without locking.
//!
//! Every lookup and its matching existence check go through the same
//! private resolver, so `exists_*(k)` is `true` exactly when `by_*(k)`
//! returns `Ok`.

use crate::dataset;
use crate::error::{DatasetError, LookupError};
use crate::field::LookupField;
use crate::ident::Ident;
use crate::index::{normalize, Indices};

/// An immutable, indexed set of country records.
#[derive(Debug, Clone)]
pub struct Registry {
    idents: Vec<Ident>,
    indices: Indices,
}

impl Registry {
    /// Index an already loaded record list.
    pub fn new(idents: Vec<Ident>) -> Self {
        let indices = Indices::build(&idents);
        Self { idents, indices }
    }

    /// Load and index a serialized dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] if the dataset does not deserialize.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::load(bytes)?))
    }

    /// Load, validate, and index a serialized dataset, rejecting malformed
    /// fields and any key shared by two records.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] found: deserialization, then
    /// field shape, then uniqueness.
    pub fn from_json_strict(bytes: &[u8]) -> Result<Self, DatasetError> {
        let idents = dataset::load(bytes)?;
        dataset::validate(&idents)?;
        if let Some(c) = Indices::collisions(&idents).into_iter().next() {
            return Err(DatasetError::DuplicateKey {
                field: c.field,
                key: c.key,
                first: c.first,
                second: c.second,
            });
        }
        Ok(Self::new(idents))
    }

    /// Load the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] if the embedded dataset is malformed,
    /// which indicates a build defect.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(dataset::EMBEDDED)
    }

    /// Find a country by name, ignoring case and surrounding whitespace.
    pub fn by_name(&self, name: &str) -> Result<&Ident, LookupError> {
        self.lookup(LookupField::Name, name)
    }

    /// Find a country by its 2-letter code, ignoring case and surrounding
    /// whitespace.
    pub fn by_alpha2(&self, code: &str) -> Result<&Ident, LookupError> {
        self.lookup(LookupField::Alpha2, code)
    }

    /// Find a country by its 3-letter code, ignoring case and surrounding
    /// whitespace.
    pub fn by_alpha3(&self, code: &str) -> Result<&Ident, LookupError> {
        self.lookup(LookupField::Alpha3, code)
    }

    /// Find a country by its numeric code.
    pub fn by_iso_num(&self, iso_num: u16) -> Result<&Ident, LookupError> {
        self.indices
            .position_by_iso_num(iso_num)
            .map(|i| &self.idents[i])
            .ok_or_else(|| LookupError::NotFound {
                field: LookupField::IsoNum,
                key: iso_num.to_string(),
            })
    }

    /// Whether a country with this name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(LookupField::Name, &normalize(name)).is_some()
    }

    /// Whether a country with this 2-letter code exists.
    pub fn exists_alpha2(&self, code: &str) -> bool {
        self.resolve(LookupField::Alpha2, &normalize(code)).is_some()
    }

    /// Whether a country with this 3-letter code exists.
    pub fn exists_alpha3(&self, code: &str) -> bool {
        self.resolve(LookupField::Alpha3, &normalize(code)).is_some()
    }

    /// Whether a country with this numeric code exists.
    pub fn exists_iso_num(&self, iso_num: u16) -> bool {
        self.indices.position_by_iso_num(iso_num).is_some()
    }

    /// Number of records in the canonical list.
    pub fn len(&self) -> usize {
        self.idents.len()
    }

    /// Whether the canonical list is empty.
    pub fn is_empty(&self) -> bool {
        self.idents.is_empty()
    }

    /// The canonical list, in dataset order.
    pub fn idents(&self) -> &[Ident] {
        &self.idents
    }

    /// Iterate the canonical list in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ident> {
        self.idents.iter()
    }

    /// Resolve an index offset to its record.
    pub fn get(&self, offset: usize) -> Option<&Ident> {
        self.idents.get(offset)
    }

    /// The raw lookup tables. Offsets resolve through [`Registry::get`].
    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    fn lookup(&self, field: LookupField, key: &str) -> Result<&Ident, LookupError> {
        let key = normalize(key);
        match self.resolve(field, &key) {
            Some(ident) => Ok(ident),
            None => Err(LookupError::NotFound { field, key }),
        }
    }

    fn resolve(&self, field: LookupField, normalized: &str) -> Option<&Ident> {
        self.indices
            .position(field, normalized)
            .map(|i| &self.idents[i])
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Ident;
    type IntoIter = std::slice::Iter<'a, Ident>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
