use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use trivia_api::{
    CategoryName, NewQuestion, PaginationConfig,
    stores::{CategoryStore, QuestionStore, sqlite::create_app_state},
};

/// A utility for creating a test database for the trivia API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Category names and the (question, answer, difficulty) triples in each.
const SAMPLE_QUESTIONS: &[(&str, &[(&str, &str, i64)])] = &[
    (
        "Science",
        &[
            ("What is the heaviest organ in the human body?", "The Liver", 4),
            ("Who discovered penicillin?", "Alexander Fleming", 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 4),
        ],
    ),
    (
        "Art",
        &[
            ("Which Dutch graphic artist was a creator of optical illusions?", "Escher", 1),
            ("La Giaconda is better known as what?", "Mona Lisa", 3),
            ("How many paintings did Van Gogh sell in his lifetime?", "One", 4),
        ],
    ),
    (
        "Geography",
        &[
            ("Lake Victoria is in which continent?", "Africa", 2),
            ("The Taj Mahal is located in which Indian city?", "Agra", 2),
            ("What is the largest lake in Africa?", "Lake Victoria", 2),
        ],
    ),
    (
        "History",
        &[
            ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
            ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
            ("Who invented Peanut Butter?", "George Washington Carver", 2),
        ],
    ),
    (
        "Entertainment",
        &[
            ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4),
            ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4),
            ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3),
        ],
    ),
    (
        "Sports",
        &[
            ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
            ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
        ],
    ),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let state = create_app_state(conn, PaginationConfig::default())?;

    for (category_name, questions) in SAMPLE_QUESTIONS {
        println!("Creating category {category_name}...");
        let category = state
            .category_store
            .create(CategoryName::new(category_name)?)?;

        for (question, answer, difficulty) in questions.iter() {
            let new_question = NewQuestion::new(
                Some(*question),
                Some(*answer),
                Some(category.id),
                Some(*difficulty),
            )?;
            state.question_store.create(new_question)?;
        }
    }

    println!(
        "Created {} questions in {} categories.",
        state.question_store.count()?,
        state.category_store.get_all()?.len()
    );
    println!("Success!");

    Ok(())
}
