//! Crate prelude.

// The actual prelude.
pub use crate::{
    builder::RelationBuilder,
    domain::{Domain, Predicate},
    error::{RelationError, Result, Side},
    relation::{Elements, Generator, Relation},
    Element,
};

// Convenient imports within the crate.
pub(crate) use crate::{set_of, utils::btree_index, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use std::{
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    rc::Rc,
};
