use std::io::{BufRead, Write};

use anyhow::Result;
use log::{error, info};

use crate::config::{BULK_CREATE_COUNT, EDIT_NAME_PLACEHOLDER};
use crate::errors::WorldModificationError;
use crate::gameworld::{clear_registry, Name, Position, World};
use crate::memory;

enum Selection {
    Number(i64),
    Invalid,
    Closed,
}

/// The interactive text front end. Reads one number per line from `input`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    world: World,
    bulk_count: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            world: World::default(),
            bulk_count: BULK_CREATE_COUNT,
        }
    }

    pub fn with_bulk_count(mut self, bulk_count: usize) -> Self {
        self.bulk_count = bulk_count;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `0` is selected or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;

            match self.read_selection()? {
                Selection::Closed | Selection::Number(0) => break,
                Selection::Number(1) => self.create_entities()?,
                Selection::Number(2) => self.edit_entity()?,
                Selection::Number(3) => self.delete_entities()?,
                Selection::Number(4) => self.print_entities()?,
                Selection::Number(5) => self.print_memory_usage()?,
                Selection::Number(6) => {
                    clear_registry();
                    info!("Type registry cleared");
                    self.print_memory_usage()?;
                }
                Selection::Number(7) => self.toggle_allocation_logging()?,
                Selection::Number(_) | Selection::Invalid => {}
            }
        }

        Ok(())
    }

    fn read_selection(&mut self) -> Result<Selection> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Selection::Closed);
        }
        Ok(match line.trim().parse() {
            Ok(number) => Selection::Number(number),
            Err(_) => Selection::Invalid,
        })
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "-------------------------")?;
        writeln!(self.output, "1: Create new entities")?;
        writeln!(self.output, "2: Edit entity")?;
        writeln!(self.output, "3: Delete entities")?;
        writeln!(self.output, "4: Print entities")?;
        writeln!(self.output, "5: Print memory usage")?;
        writeln!(self.output, "6: Clear type registry")?;
        writeln!(self.output, "7: Toggle allocation logging")?;
        writeln!(self.output, "0: Exit")?;
        writeln!(self.output, "-------------------------")?;
        Ok(())
    }

    fn print_memory_usage(&mut self) -> Result<()> {
        writeln!(self.output, "{}", memory::usage_report())?;
        Ok(())
    }

    fn create_entities(&mut self) -> Result<()> {
        self.world.spawn_populated(self.bulk_count)?;
        self.print_memory_usage()
    }

    fn delete_entities(&mut self) -> Result<()> {
        writeln!(self.output, "Remove entities")?;
        self.world.clear_all();
        self.print_memory_usage()
    }

    fn print_entities(&mut self) -> Result<()> {
        writeln!(self.output, "Entities:")?;
        for (idx, description) in self.world.describe_all() {
            match description {
                Ok(listing) => write!(self.output, "{}: Entity:\n{}", idx, listing)?,
                Err(err) => {
                    error!("Cannot describe entity {}: {}", idx, err);
                    writeln!(self.output, "{}: Entity:\n<unregistered>", idx)?;
                }
            }
        }
        Ok(())
    }

    fn edit_entity(&mut self) -> Result<()> {
        writeln!(self.output, "Select entity:")?;
        self.print_entities()?;

        let index = match self.read_selection()? {
            Selection::Number(number) => number,
            Selection::Invalid | Selection::Closed => return Ok(()),
        };
        let index = match usize::try_from(index) {
            Ok(index) if index < self.world.count() => index,
            _ => {
                let err = WorldModificationError(format!("no entity at index {}", index));
                writeln!(self.output, "{}", err)?;
                return Ok(());
            }
        };

        loop {
            writeln!(self.output, "1: Add component")?;
            writeln!(self.output, "0: Exit")?;

            match self.read_selection()? {
                Selection::Closed | Selection::Number(0) => break,
                Selection::Number(1) => self.add_component(index)?,
                Selection::Number(_) | Selection::Invalid => {}
            }
        }

        Ok(())
    }

    fn add_component(&mut self, index: usize) -> Result<()> {
        writeln!(self.output, "1: Name")?;
        writeln!(self.output, "2: Position")?;

        let selection = self.read_selection()?;
        let entity = self.world.at(index);
        match selection {
            Selection::Number(1) => {
                entity.add_component(Name::new(EDIT_NAME_PLACEHOLDER))?;
            }
            Selection::Number(2) => {
                entity.add_component(Position::new(0, 0))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn toggle_allocation_logging(&mut self) -> Result<()> {
        match memory::toggle_verbose() {
            Some(true) => writeln!(self.output, "Allocation logging enabled")?,
            Some(false) => writeln!(self.output, "Allocation logging disabled")?,
            None => writeln!(self.output, "Allocation tracking is not installed")?,
        }
        Ok(())
    }
}
