//! Interactive enrollment flow: prompt for each profile field, persist
//! the record and canonical image, report one combined status.

use crate::config::Config;
use anyhow::{bail, Result};
use faceview_store::{IdentityRecord, RecordStore};
use std::io::{self, BufRead, Write};

pub fn run(config: &Config) -> Result<()> {
    // Storage roots must exist before any field collection starts.
    let store = RecordStore::create(config.details_dir.clone(), config.image_dir.clone())?;

    let stdin = io::stdin();
    let record = collect_details(&mut stdin.lock(), &mut io::stdout())?;

    let record_saved = match store.save_record(&record) {
        Ok(path) => {
            println!("User details saved to: {}", path.display());
            true
        }
        Err(err) => {
            eprintln!("Failed to save user details: {err}");
            false
        }
    };

    let image_saved = match store.save_profile_image(&record) {
        Ok(path) => {
            println!("Image saved to: {}", path.display());
            true
        }
        Err(err) => {
            eprintln!("Failed to save image: {err}");
            false
        }
    };

    match (record_saved, image_saved) {
        (true, true) => println!("User details and image saved successfully."),
        (true, false) => println!("User details saved, but the image could not be saved."),
        (false, _) => bail!("failed to save user details and image"),
    }
    Ok(())
}

fn collect_details(input: &mut impl BufRead, out: &mut impl Write) -> Result<IdentityRecord> {
    writeln!(out, "Please enter your details below:")?;

    let record = IdentityRecord {
        name: prompt(input, out, "Name: ")?,
        gender: prompt(input, out, "Gender (Male/Female/Other): ")?,
        age: prompt(input, out, "Age: ")?,
        father_name: prompt(input, out, "Father's Name: ")?,
        mother_name: prompt(input, out, "Mother's Name: ")?,
        date_of_birth: prompt(input, out, "Date of Birth (YYYY-MM-DD): ")?,
        mobile_number: prompt(input, out, "Mobile Number: ")?,
        email: prompt(input, out, "Email Address: ")?,
        address: prompt(input, out, "Address: ")?,
        pincode: prompt(input, out, "Pincode: ")?,
        image_path: prompt(input, out, "Path to image file (e.g., /path/to/image.jpg): ")?,
    };

    writeln!(out, "\nDetails collected successfully:")?;
    for (label, value) in record.fields() {
        writeln!(out, "{label}: {value}")?;
    }

    Ok(record)
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
