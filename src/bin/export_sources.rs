//! Dump the dashboard web-app sources into one reviewable text file.
//!
//! Run from the project root of the companion web app:
//!
//! ```text
//! export_sources            # writes ./project_files.txt
//! ```

use anyhow::Result;

use growhouse::export::export_files;

/// Files bundled into the export, in output order.
const MANIFEST: &[&str] = &[
    "app/layout.tsx",
    "app/page.tsx",
    "app/globals.css",
    "app/components/Footer.tsx",
    "app/components/Navbar.tsx",
    "app/components/PlantDetails.tsx",
    "app/components/PlantGrid.tsx",
    "app/components/LineChart.tsx",
    "pages/api/control-led.ts",
    "pages/api/control-pump.ts",
    "pages/api/sensor-data.ts",
    "pages/api/send-email.ts",
    "README-2.md",
    "project_structure.txt",
];

const OUTPUT_FILE: &str = "project_files.txt";

fn main() -> Result<()> {
    export_files(MANIFEST, OUTPUT_FILE)?;
    println!("Files have been extracted to {OUTPUT_FILE}");
    Ok(())
}
