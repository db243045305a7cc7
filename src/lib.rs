#![doc = "jenkins-onboard: generate Jenkins pipeline job configs and create the jobs remotely."]

//! Two steps share this crate, connected only through files on disk:
//!
//! - [`generate`] turns every `Jenkinsfile*` in a directory into a sibling
//!   `config_<name>.xml` job document.
//! - [`upload`] posts every `config_Jenkinsfile.<name>.xml` to a Jenkins
//!   server's `createItem` endpoint, one request at a time.
//!
//! The binaries `generate-configs` and `create-jobs` are thin wrappers
//! around [`cli`].

pub mod cli;
pub mod client;
pub mod config;
pub mod contract;
pub mod discover;
pub mod error;
pub mod generate;
pub mod job_config;
pub mod logging;
pub mod paths;
pub mod upload;
pub mod xml;
