use crate::errors::SimError;
use crate::models::Trajectory;
use crate::physics::energy::{calculate_angular_momentum, calculate_energy};
use ::csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 8] = [
    "time",
    "x",
    "y",
    "vx",
    "vy",
    "radius",
    "specific_energy",
    "angular_momentum",
];

/// Writes every trajectory point as one CSV record.
pub fn write_trajectory<W: Write>(
    writer: W,
    mu: f64,
    trajectory: &Trajectory,
) -> Result<(), SimError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    for point in trajectory.points() {
        let s = &point.state;
        writer.write_record(&[
            point.time.to_string(),
            s.position.x.to_string(),
            s.position.y.to_string(),
            s.velocity.x.to_string(),
            s.velocity.y.to_string(),
            s.radius().to_string(),
            calculate_energy(mu, s).to_string(),
            calculate_angular_momentum(s).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_trajectory_file<P: AsRef<Path>>(
    path: P,
    mu: f64,
    trajectory: &Trajectory,
) -> Result<(), SimError> {
    let file = File::create(path)?;
    write_trajectory(file, mu, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::State;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut trajectory = Trajectory::default();
        trajectory.push(0.0, State::from_components(1.0, 0.0, 0.0, 1.0));
        trajectory.push(0.5, State::from_components(0.0, 2.0, -0.5, 0.0));

        let mut buf = Vec::new();
        write_trajectory(&mut buf, 1.0, &trajectory).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[0], "time,x,y,vx,vy,radius,specific_energy,angular_momentum");
        assert_eq!(lines[1], "0,1,0,0,1,1,-0.5,1");
        assert!(lines[2].starts_with("0.5,0,2,-0.5,0,2,"));
    }
}
