//! Hashes an admin secret for out-of-band provisioning.
//!
//! Prints the Argon2 PHC string to insert into the admins table:
//!
//!   INSERT INTO admins (identifier, secret_hash) VALUES ('<identifier>', '<hash>');

use std::env;
use std::process::ExitCode;

use secrecy::SecretString;

use quizdeck_server::services::auth_service::hash_secret;

fn main() -> ExitCode {
    let Some(secret) = env::args().nth(1) else {
        eprintln!("usage: hash_admin_secret <secret>");
        return ExitCode::FAILURE;
    };

    match hash_secret(&SecretString::from(secret)) {
        Ok(hash) => {
            println!("{}", hash);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to hash secret: {}", e);
            ExitCode::FAILURE
        }
    }
}
