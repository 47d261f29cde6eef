//! Instruction prompt sent to the model

/// Fixed instructions and worked examples that precede the raw document
pub const INSTRUCTIONS: &str = r#"You are to reformat ACU point data based on documentation.
Rules:
1. Keep format :ACU:PNT:FI:<ID>:<NAME>:"<DESC>":grp "Slave Table"
2. Remove units, ranges, underscores, and unused markers from names.
3. Add evt mappings from value descriptions in doc: format :evt "Label"==<Value>,0:
4. Match exactly the style:
:ACU:PNT:FI:10000:EPHEMERIS_TIME_OFFSET:"Ephemeris Time Offset":grp "Slave Table":
:ACU:PNT:FI:10001:AOS_TIME_FOR_T0_TRIGGER:"AOS Time For T0 Trigger Number Of Second Since Begin Of The Day":grp "Slave Table":evt "Disable"==0,0:
:ACU:PNT:FI:10004:EPHEMERIS_TABLE:"Ephemeris Table":grp "Slave Table":evt "Ephemeris Table 1"==0,0:evt "Ephemeris Table 2"==1,0:
:ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:"Elevation Minimum Angle":grp "Slave Table":
"#;

/// Build the single user message for a document
pub fn build_prompt(raw: &str) -> String {
    format!("{}Input:\n{}\n", INSTRUCTIONS, raw)
}
