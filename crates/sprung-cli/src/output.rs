//! Plain-text coordinate output.

use std::io::{self, Write};

use sprung::Simulation;

/// Writes the simulation's layout, centered on the origin, as `<id> <x> <y>`
/// lines preceded by a `#` summary header.
pub fn write_coordinates(writer: &mut impl Write, simulation: &Simulation) -> io::Result<()> {
    let layout = simulation.layout().centered();

    writeln!(writer, "# nodes {}", layout.node_count())?;
    writeln!(writer, "# edges {}", layout.graph().edge_count())?;
    writeln!(writer, "# steps {}", simulation.steps())?;
    writeln!(writer, "# tension {:.6}", layout.tension())?;
    for (id, position) in layout.positions().iter().enumerate() {
        writeln!(writer, "{id} {:.6} {:.6}", position.x(), position.y())?;
    }
    writer.flush()
}
