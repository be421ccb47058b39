use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::quiz::{
    AgeBand, ExperienceLevel, FinancialGoal, Gender, PersonalInfo, ProfileChoice, QuestionId,
};

/// One respondent as read from the CSV, before answer validation.
#[derive(Debug)]
pub(crate) struct RespondentRecord {
    /// 1-based, header excluded.
    pub(crate) row: usize,
    pub(crate) personal_info: PersonalInfo,
    pub(crate) raw_answers: Vec<(QuestionId, String)>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RespondentRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<RespondentRow>().enumerate() {
        let row = record?;
        records.push(RespondentRecord {
            row: index + 1,
            personal_info: row.personal_info(),
            raw_answers: row.raw_answers(),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RespondentRow {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    goal: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q3: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q4: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q5: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q6: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q7: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q8: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q9: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q10: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q11: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q12: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q13: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q14: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    q15: Option<String>,
}

impl RespondentRow {
    fn personal_info(&self) -> PersonalInfo {
        PersonalInfo {
            name: self.name.clone(),
            age: self.age.as_deref().and_then(AgeBand::parse),
            gender: self.gender.as_deref().and_then(Gender::parse),
            experience: self.experience.as_deref().and_then(ExperienceLevel::parse),
            goal: self.goal.as_deref().and_then(FinancialGoal::parse),
        }
    }

    fn raw_answers(self) -> Vec<(QuestionId, String)> {
        let columns = [
            (QuestionId::Q1, self.q1),
            (QuestionId::Q2, self.q2),
            (QuestionId::Q3, self.q3),
            (QuestionId::Q4, self.q4),
            (QuestionId::Q5, self.q5),
            (QuestionId::Q6, self.q6),
            (QuestionId::Q7, self.q7),
            (QuestionId::Q8, self.q8),
            (QuestionId::Q9, self.q9),
            (QuestionId::Q10, self.q10),
            (QuestionId::Q11, self.q11),
            (QuestionId::Q12, self.q12),
            (QuestionId::Q13, self.q13),
            (QuestionId::Q14, self.q14),
            (QuestionId::Q15, self.q15),
        ];
        columns
            .into_iter()
            .filter_map(|(question, value)| value.map(|value| (question, value)))
            .collect()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
