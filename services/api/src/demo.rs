use crate::infra::parse_choice;
use clap::Args;
use finquiz::config::AppConfig;
use finquiz::error::AppError;
use finquiz::workflows::batch::{BatchImporter, BatchOutcome};
use finquiz::workflows::quiz::{
    compose, compute_scores, questionnaire, score_breakdown, AgeBand, AnswerGuard, AnswerOption,
    AnswerSet, CategoryScores, ExperienceLevel, FinancialGoal, Gender, PersonalInfo,
    ProfileChoice, QuizSession, QuizStage, Recommendation, ResultView, ScoreBreakdown,
};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Respondent name used in the description and headline
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Age band (18-24, 25-34, 35-44, 45-54, 55-64, 65+)
    #[arg(long, value_parser = parse_choice::<AgeBand>)]
    pub(crate) age: Option<AgeBand>,
    /// Gender (male, female, nonbinary, other, prefer-not)
    #[arg(long, value_parser = parse_choice::<Gender>)]
    pub(crate) gender: Option<Gender>,
    /// Trading experience (beginner, some, experienced, professional)
    #[arg(long, value_parser = parse_choice::<ExperienceLevel>)]
    pub(crate) experience: Option<ExperienceLevel>,
    /// Primary goal (grow-wealth, passive-income, quick-returns, retirement, major-purchase, learn)
    #[arg(long, value_parser = parse_choice::<FinancialGoal>)]
    pub(crate) goal: Option<FinancialGoal>,
}

impl ProfileArgs {
    pub(crate) fn personal_info(&self) -> PersonalInfo {
        PersonalInfo {
            name: self.name.clone().unwrap_or_default(),
            age: self.age,
            gender: self.gender,
            experience: self.experience,
            goal: self.goal,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Answer as `q1=a`; repeat for each question. Unanswered questions count as `d`.
    #[arg(long = "answer", value_name = "QUESTION=OPTION")]
    pub(crate) answers: Vec<String>,
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Print every band contribution behind the scores
    #[arg(long)]
    pub(crate) breakdown: bool,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with name, age, gender, experience, goal and q1..q15 columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Emit JSON instead of one line per respondent
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the score breakdown for each scripted respondent
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Debug, Serialize)]
struct RecommendationReport<'a> {
    scores: CategoryScores,
    recommendation: &'a Recommendation,
    view: &'a ResultView,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a ScoreBreakdown>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        profile,
        breakdown,
        json,
    } = args;

    let answers = AnswerGuard.answers_from_pairs(&answers)?;
    let info = profile.personal_info();
    let scored = score_breakdown(&answers);
    let recommendation = compose(&scored.scores, &answers, &info);
    let view = ResultView::build(&recommendation, &info);

    let mut stdout = std::io::stdout().lock();
    if json {
        let report = RecommendationReport {
            scores: scored.scores,
            recommendation: &recommendation,
            view: &view,
            breakdown: breakdown.then_some(&scored),
        };
        let payload = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        writeln!(stdout, "{payload}")?;
    } else {
        render_recommendation(&mut stdout, &recommendation, &view, &scored.scores)?;
        if breakdown {
            render_breakdown(&mut stdout, &scored)?;
        }
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let outcomes = BatchImporter::from_path(&args.input)?;
    let mut stdout = std::io::stdout().lock();

    if args.json {
        let payload = serde_json::to_string_pretty(&outcomes).map_err(std::io::Error::from)?;
        writeln!(stdout, "{payload}")?;
        return Ok(());
    }

    writeln!(
        stdout,
        "Scored {} respondent(s) from {}",
        outcomes.len(),
        args.input.display()
    )?;
    for outcome in &outcomes {
        writeln!(stdout, "{}", batch_line(outcome))?;
    }
    Ok(())
}

fn batch_line(outcome: &BatchOutcome) -> String {
    let name = outcome
        .personal_info
        .display_name()
        .unwrap_or("(anonymous)");
    let winner = outcome
        .recommendation
        .category
        .map(|category| format!("{} {}", category.key(), outcome.scores.get(category)))
        .unwrap_or_else(|| "no category above zero".to_string());
    let secondary = if outcome.recommendation.secondary.is_some() {
        " + education"
    } else {
        ""
    };
    format!(
        "- row {} | {} | {} ({}){}",
        outcome.row, name, outcome.recommendation.title, winner, secondary
    )
}

pub(crate) async fn run_play() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    play_session(&mut input, &mut output, config.quiz.reveal_delay()).await?;
    Ok(())
}

/// Drive a [`QuizSession`] from line-based input until the result is revealed.
pub(crate) async fn play_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    reveal_delay: Duration,
) -> Result<Recommendation, AppError> {
    let mut session = QuizSession::new();

    writeln!(output, "Discover your ideal financial product")?;
    let name = loop {
        let name = prompt(input, output, "Your name")?;
        if !name.is_empty() {
            break name;
        }
    };
    let info = PersonalInfo {
        name,
        age: Some(ask_choice::<AgeBand, _, _>(input, output, "Age group")?),
        gender: Some(ask_choice::<Gender, _, _>(input, output, "Gender")?),
        experience: Some(ask_choice::<ExperienceLevel, _, _>(
            input,
            output,
            "Investment experience",
        )?),
        goal: Some(ask_choice::<FinancialGoal, _, _>(
            input,
            output,
            "Primary financial goal",
        )?),
    };
    session.update_personal_info(info)?;
    session.start()?;

    while session.stage() == QuizStage::Questioning {
        let Some(question) = session.current_question() else {
            break;
        };
        writeln!(
            output,
            "\nQuestion {} of {} ({:.0}% complete)\n{}",
            session.question_index() + 1,
            questionnaire::question_count(),
            session.progress_pct(),
            question.prompt
        )?;
        for option in &question.options {
            writeln!(output, "  {}) {}", option.value, option.text)?;
        }

        let reply = prompt(input, output, "Answer (a-d, or 'back')")?;
        if reply.eq_ignore_ascii_case("back") {
            session.previous()?;
            continue;
        }
        match AnswerOption::parse(&reply) {
            Some(option) => {
                session.select_answer(option)?;
                session.next()?;
            }
            None => writeln!(output, "Please pick a, b, c or d.")?,
        }
    }

    let loading = session.loading_message();
    writeln!(output, "\n{} {}", loading.marker, loading.message)?;
    output.flush()?;
    tokio::time::sleep(reveal_delay).await;

    let recommendation = session.reveal()?;
    let view = ResultView::build(&recommendation, session.personal_info());
    let scores = compute_scores(session.answers());
    render_recommendation(output, &recommendation, &view, &scores)?;
    Ok(recommendation)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, AppError> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before the questionnaire finished",
        )
        .into());
    }
    Ok(line.trim().to_string())
}

fn ask_choice<T: ProfileChoice, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<T, AppError> {
    let keys: Vec<&str> = T::ordered().iter().map(|choice| choice.key()).collect();
    loop {
        let reply = prompt(input, output, &format!("{label} [{}]", keys.join(", ")))?;
        match parse_choice::<T>(&reply) {
            Ok(choice) => return Ok(choice),
            Err(message) => writeln!(output, "{message}")?,
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Financial questionnaire demo")?;

    for (label, info, answers) in demo_respondents()? {
        writeln!(stdout, "\n=== {label} ===")?;
        let scored = score_breakdown(&answers);
        let recommendation = compose(&scored.scores, &answers, &info);
        let view = ResultView::build(&recommendation, &info);
        render_recommendation(&mut stdout, &recommendation, &view, &scored.scores)?;
        if args.breakdown {
            render_breakdown(&mut stdout, &scored)?;
        }
    }
    Ok(())
}

fn demo_respondents() -> Result<Vec<(&'static str, PersonalInfo, AnswerSet)>, AppError> {
    let guard = AnswerGuard;
    Ok(vec![
        (
            "Curious newcomer",
            PersonalInfo {
                name: "Maya".to_string(),
                age: Some(AgeBand::From18To24),
                gender: Some(Gender::Female),
                experience: Some(ExperienceLevel::Beginner),
                goal: Some(FinancialGoal::Learn),
            },
            AnswerSet::uniform(AnswerOption::A),
        ),
        (
            "Patient saver",
            PersonalInfo {
                name: "Tom".to_string(),
                age: Some(AgeBand::From45To54),
                gender: Some(Gender::Male),
                experience: Some(ExperienceLevel::Occasional),
                goal: Some(FinancialGoal::Retirement),
            },
            guard.answers_from_pairs(&[
                "q1=c", "q2=c", "q8=b", "q3=b", "q4=b", "q9=b", "q12=b", "q5=c", "q10=d",
                "q6=b", "q7=b", "q11=b", "q13=b", "q14=b", "q15=a",
            ])?,
        ),
        (
            "Seasoned speculator",
            PersonalInfo {
                name: "Riley".to_string(),
                age: Some(AgeBand::From35To44),
                gender: Some(Gender::PreferNot),
                experience: Some(ExperienceLevel::Professional),
                goal: Some(FinancialGoal::QuickReturns),
            },
            AnswerSet::uniform(AnswerOption::D),
        ),
        (
            "Anonymous visitor",
            PersonalInfo::default(),
            guard.answers_from_pairs(&["q1=a", "q3=b", "q5=c", "q10=c"])?,
        ),
    ])
}

fn render_recommendation<W: Write>(
    output: &mut W,
    recommendation: &Recommendation,
    view: &ResultView,
    scores: &CategoryScores,
) -> std::io::Result<()> {
    writeln!(output, "{} {}", view.marker, view.headline)?;
    writeln!(output, "{}", recommendation.title)?;
    writeln!(output, "{}", recommendation.description)?;
    writeln!(output, "{}", view.tagline)?;
    writeln!(output, "Why this fits you:")?;
    for reason in &recommendation.reasons {
        writeln!(output, "  - {reason}")?;
    }
    if let Some(fit) = &view.profile_fit {
        writeln!(output, "How this fits your profile: {fit}")?;
    }
    if let Some(note) = view.secondary_note {
        writeln!(output, "Also consider: {note}")?;
    }
    let totals: Vec<String> = scores
        .iter()
        .map(|(category, score)| format!("{} {}", category.key(), score))
        .collect();
    writeln!(output, "Scores: {}", totals.join(" | "))?;
    writeln!(output, "{}", view.call_to_action)
}

fn render_breakdown<W: Write>(output: &mut W, breakdown: &ScoreBreakdown) -> std::io::Result<()> {
    let sub = &breakdown.sub_scores;
    writeln!(
        output,
        "Sub-scores: knowledge {} | risk {} | time {} | goal {} | psych {}",
        sub.knowledge, sub.risk, sub.time, sub.goal, sub.psych
    )?;
    for component in &breakdown.components {
        writeln!(
            output,
            "  - {} {:>2}  {}",
            component.category.key(),
            component.points,
            component.notes
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use finquiz::workflows::quiz::ProductCategory;
    use std::io::Cursor;

    fn profile_lines() -> String {
        "Maya\n18-24\nfemale\nbeginner\nlearn\n".to_string()
    }

    #[tokio::test]
    async fn play_session_walks_through_to_result() {
        let script = format!("{}{}", profile_lines(), "a\n".repeat(15));
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let recommendation = play_session(&mut input, &mut output, Duration::ZERO)
            .await
            .expect("session completes");

        assert_eq!(recommendation.category, Some(ProductCategory::Education));
        let transcript = String::from_utf8(output).expect("utf8 output");
        assert!(transcript.contains("Question 15 of 15"));
        assert!(transcript.contains("Maya, Here's Your Perfect Match!"));
        assert!(transcript.contains("Get Started with Education Program"));
    }

    #[tokio::test]
    async fn play_session_reprompts_and_supports_back() {
        let script = format!(
            "{}{}{}",
            "Sam\n99\n2\nfemale\nsome\nretirement\n",
            "z\nd\nback\n",
            "d\n".repeat(15)
        );
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let recommendation = play_session(&mut input, &mut output, Duration::ZERO)
            .await
            .expect("session completes");

        assert_eq!(recommendation.title, "Forex Trading");
        let transcript = String::from_utf8(output).expect("utf8 output");
        assert!(transcript.contains("'99' is not one of"));
        assert!(transcript.contains("Please pick a, b, c or d."));
    }

    #[tokio::test]
    async fn play_session_fails_on_closed_input() {
        let mut input = Cursor::new(b"Maya\n".to_vec());
        let mut output = Vec::new();
        let error = play_session(&mut input, &mut output, Duration::ZERO)
            .await
            .expect_err("input ends early");
        assert!(matches!(error, AppError::Io(_)));
    }

    #[test]
    fn demo_respondents_cover_distinct_outcomes() {
        let titles: Vec<String> = demo_respondents()
            .expect("scripted answers are valid")
            .into_iter()
            .map(|(_, info, answers)| finquiz::workflows::quiz::recommend(&answers, &info).title)
            .collect();
        assert_eq!(titles[0], "Education Program");
        assert_eq!(titles[1], "Long-term Stock Investing");
        assert_eq!(titles[2], "Forex Trading");
    }

    #[test]
    fn batch_line_summarizes_outcome() {
        let csv = "name,q1\nAna,a\n";
        let outcome = BatchImporter::from_reader(csv.as_bytes())
            .expect("import")
            .pop()
            .expect("row");
        let line = batch_line(&outcome);
        assert!(line.starts_with("- row 1 | Ana |"));
        assert!(line.ends_with("+ education"));
    }
}
