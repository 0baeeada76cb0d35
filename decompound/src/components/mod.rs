//! The building blocks of decompounding. Every component which is expensive to build can be stored
//! in a binary format and loaded again through the [Component] trait.

use std::{
    io::{BufReader, Read, Write},
    path::Path,
};

use fs_err::File;
use log::info;
use serde::{de::DeserializeOwned, Serialize};

pub mod decompounder;
pub mod dictionary;
pub mod frequency;
pub mod phrase;
pub mod ranker;
pub mod splitter;

pub trait Component: Serialize + DeserializeOwned {
    fn name() -> &'static str;

    /// Loads a component from a binary at `p` as written by [Component::to_writer].
    fn new<P: AsRef<Path>>(p: P) -> Result<Self, crate::Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        let component = Self::from_reader(reader)?;

        info!("Loaded {} from {}.", Self::name(), p.as_ref().display());
        Ok(component)
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, crate::Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), crate::Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }
}
