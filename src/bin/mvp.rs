use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use mvp::{config::TransformConfig, demo::Demo, uniform::UploadOrder};
    use std::{fmt, path::PathBuf};

    #[derive(Debug, Parser)]
    #[command(about = "Model, view and projection transform utilities", long_about = None)]
    struct Cli {
        /// Number of decimals to print (full precision if omitted)
        #[arg(short, long, global = true)]
        precision: Option<usize>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print two translation matrices, their product and a transformed point
        Demo,
        /// Transform the configured points by `projection * view * model`
        Transform {
            /// Path to the RON transform configuration
            #[arg(short, long)]
            config: PathBuf,
        },
        /// Print the uniform buffers of the configured matrices
        Uniforms {
            /// Path to the RON transform configuration
            #[arg(short, long)]
            config: PathBuf,

            /// Element order of the printed buffers
            #[arg(short, long, value_enum, default_value_t = UploadOrder::ColumnMajor)]
            order: UploadOrder,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running command {:?}", cli.command);

        match cli.command {
            Command::Demo => {
                let demo = Demo::new();
                match cli.precision {
                    Some(precision) => println!("{demo:.precision$}"),
                    None => println!("{demo}"),
                }
            }
            Command::Transform { config } => {
                let config = TransformConfig::from_ron_file(config)?;
                let combined = config.uniforms().combined();
                print_with_precision("projection * view * model =", &combined, cli.precision);
                for (point, transformed) in config.points.iter().zip(config.transformed_points()) {
                    println!();
                    print_with_precision("point =", point, cli.precision);
                    print_with_precision("transformed =", &transformed, cli.precision);
                }
            }
            Command::Uniforms { config, order } => {
                let config = TransformConfig::from_ron_file(config)?;
                for upload in config.uniforms().uploads(order) {
                    print_with_precision("", &upload, cli.precision);
                }
            }
        }
        Ok(())
    }

    fn print_with_precision(label: &str, value: &impl fmt::Display, precision: Option<usize>) {
        if !label.is_empty() {
            println!("{label}");
        }
        match precision {
            Some(precision) => println!("{value:.precision$}"),
            None => println!("{value}"),
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
