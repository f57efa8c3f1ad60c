//! Prompt construction for scrum update extraction

/// Builds the system prompt for a given reference date
#[must_use]
pub fn system_prompt(reference_date: &str) -> String {
  format!(
    "You extract structured data from free-text daily scrum updates.\n\
     Today's date is {reference_date}. Resolve relative dates (\"yesterday\", \"next Monday\") \
     against it and write every date as YYYY-MM-DD.\n\
     \n\
     Respond with a single JSON object and nothing else, using these keys:\n\
     - \"date\": the date the update refers to\n\
     - \"completed\": array of strings, work finished since the previous update\n\
     - \"planned\": array of strings, work planned next\n\
     - \"blockers\": array of strings, impediments; empty if none are mentioned\n\
     - \"people\": array of strings, teammates mentioned by name\n\
     - \"deadlines\": array of objects {{\"task\": string, \"due\": string}}\n\
     Use empty arrays for missing information. Do not invent facts."
  )
}

/// Wraps the raw user input for the user message
#[must_use]
pub fn user_prompt(text: &str) -> String {
  format!("Scrum update:\n\"\"\"\n{}\n\"\"\"", text.trim())
}
