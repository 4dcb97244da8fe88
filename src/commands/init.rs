//! Configuration initialization command.
//!
//! Runs the interactive wizard that writes the database credentials, or
//! removes the settings file with `--delete`.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        match Config::delete(&DataStorage::new())? {
            Some(path) => msg_success!(Message::ConfigDeleted(path.display().to_string())),
            None => msg_info!(Message::ConfigAlreadyAbsent),
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
