use hamming_codec::{BlockCodec, ErrorType, MembershipTable, scan_parity_group};
use hamming_config::{OutputFormat, ToolConfig};
use hamming_core::{HammingErr, ParityGroup, Position, PositionKind, PositionSet};

use crate::trick::Game;

/// Prints command results according to the output settings
pub struct Renderer {
    format: OutputFormat,
    show_syndrome: bool,
    explain_rows: usize,
}

impl Renderer {
    pub fn new(cfg: &ToolConfig) -> Self {
        Self {
            format: cfg.output.format,
            show_syndrome: cfg.output.show_syndrome,
            explain_rows: cfg.lesson.explain_rows,
        }
    }

    fn set(&self, set: &PositionSet) -> String {
        match self.format {
            OutputFormat::Ids => set.to_string(),
            OutputFormat::Bits => set.to_bitstr(),
        }
    }

    pub fn print_encode(&self, codec: &impl BlockCodec, value: u8) -> Result<(), HammingErr> {
        let cw = codec.encode(value)?;
        println!("{} -> {}", value, self.set(&cw));
        Ok(())
    }

    pub fn print_decode(&self, codec: &impl BlockCodec, input: &str) -> Result<(), HammingErr> {
        let selection = PositionSet::parse(input)?;
        let r = codec.decode(&selection);
        println!("selection:       {}", self.set(&selection));
        if self.show_syndrome {
            println!("syndrome:        {}", r.syndrome);
        }
        println!("error detected:  {}", r.error_detected);
        println!("error position:  {}", r.error_position_id());
        println!("corrected value: {}", r.corrected_value);
        Ok(())
    }

    pub fn print_classify(&self, codec: &impl BlockCodec, input: &str) -> Result<(), HammingErr> {
        let selection = PositionSet::parse(input)?;
        let r = codec.decode(&selection);
        let error_type = codec.classify(&selection, &r)?;
        match error_type {
            ErrorType::None => println!("{}: no wrong card, value {}", self.set(&selection), r.corrected_value),
            _ => println!(
                "{}: card {} is wrong ({}), value {}",
                self.set(&selection),
                r.error_position_id(),
                error_type,
                r.corrected_value
            ),
        }
        Ok(())
    }

    pub fn print_invitees(&self, codec: &impl BlockCodec, position_id: u8) -> Result<(), HammingErr> {
        let list = codec.invitees(position_id)?;
        println!("{}: {:?}", position_id, list);

        let pos = Position::new(position_id)?;
        if let Some(group) = ParityGroup::for_position(pos) {
            let scan = scan_parity_group(group, self.explain_rows);
            let houses: Vec<u8> = scan.houses_to_check.iter().map(|p| p.id()).collect();
            println!("checks cards {:?}", houses);
            for row in &scan.explanation {
                println!(
                    "  {:>2} appears on {} of them -> {}",
                    row.visitor,
                    row.appearances,
                    if row.invited { "invited" } else { "not invited" }
                );
            }
        }
        Ok(())
    }

    pub fn print_table(&self, table: &MembershipTable) {
        for (pos, kind, list) in table.iter() {
            let kind = match kind {
                PositionKind::Parity => "parity",
                PositionKind::Data => "data",
            };
            println!("{} {:<6} {:?}", pos, kind, list);
        }
    }

    pub fn print_trick(&self, codec: &impl BlockCodec, game: &Game) -> Result<(), HammingErr> {
        let r = codec.decode(&game.shown);
        let error_type = codec.classify(&game.shown, &r)?;
        println!("cards shown: {}", self.set(&game.shown));
        println!("you thought of {}", r.corrected_value);
        match error_type {
            ErrorType::None => println!("and every card told the truth"),
            _ => println!("and card {} lied ({})", r.error_position_id(), error_type),
        }
        tracing::debug!("trick: value {} lie {:?}", game.value, game.lie);
        Ok(())
    }
}
