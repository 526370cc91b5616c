use crate::core::Apu;
use log::*;
use std::path::Path;

/// Serialize the APU and write it to `path`
pub fn write_savestate(apu: &Apu, path: &Path) -> Result<(), String> {
    let data = apu
        .to_savestate()
        .map_err(|e| format!("Unable to create savestate: {}", e))?;
    std::fs::write(path, data).map_err(|e| format!("Unable to save savestate: {}", e))?;
    debug!("Wrote savestate to {:?}", path);
    Ok(())
}
/// Read a savestate written by [write_savestate]
pub fn read_savestate(path: &Path) -> Result<Apu, String> {
    let data =
        std::fs::read(path).map_err(|e| format!("Unable to read save state {:?}: {}", path, e))?;
    let apu = Apu::from_savestate(&data)
        .map_err(|e| format!("Unable to deserialize save state {:?}: {}", path, e))?;
    info!("Loaded savestate at {:?}", path);
    Ok(apu)
}
