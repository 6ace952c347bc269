use std::path::Path;

use finbridge_core::error::FinbridgeError;
use finbridge_core::schedule_appointment;
use finbridge_core::store::applications::ApplicationStore;
use finbridge_core::store::appointments::AppointmentStore;

pub fn run(data_dir: &Path, app_id: u64, when: &str) -> Result<(), FinbridgeError> {
    let applications = ApplicationStore::in_dir(data_dir);
    let appointments = AppointmentStore::in_dir(data_dir);

    let appointment = schedule_appointment(&applications, &appointments, app_id, when)?;
    println!(
        "Appointment scheduled: {} (ID: {})",
        appointment.scheduled_time, appointment.appointment_id
    );
    Ok(())
}
