// Query simulator behaviour through the public API
use pgtutor::core::SimulatedResultSet;
use pgtutor::simulator::{DEMO_NOTE, PageContext, simulate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[char] = &[
    'a', 'e', 's', 'l', 'c', 't', 'f', 'r', 'o', 'm', 'u', 'w', 'h', 'i', 'n', 'S', 'E', 'L', ' ', ' ', '*',
    ';', '\n', '\t', '\'', '(', ')', '_', '=', 'é', '日', '\0',
];

const FRAGMENTS: &[&str] = &[
    "select * from users",
    "WHERE is_carrier",
    "CREATE TABLE",
    "insert into",
    "SELECT",
    "drop",
];

fn random_sql(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..60);
    let mut s: String = (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect();
    if rng.gen_range(0..4) == 0 {
        let at = rng.gen_range(0..=s.chars().count());
        let byte = s.char_indices().nth(at).map_or(s.len(), |(i, _)| i);
        s.insert_str(byte, FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())]);
    }
    s
}

#[test]
fn test_simulate_is_total_on_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut inputs: Vec<String> = vec![String::new()];
    inputs.extend((0..999).map(|_| random_sql(&mut rng)));

    for input in &inputs {
        for page in PageContext::ALL {
            let first = simulate(input, page);
            let kinds = [first.rows().is_some(), first.is_success(), first.error().is_some()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{input:?} on {page}");
            assert_eq!(first, simulate(input, page), "not deterministic: {input:?} on {page}");
        }
    }
}

#[test]
fn test_select_all_users_on_part_one() {
    let result = simulate("SELECT * FROM users;", PageContext::from_part(1));
    let rows = result.rows().expect("rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.columns(),
        ["id", "name", "email", "phone", "is_carrier", "is_shipper", "created_at", "updated_at"]
    );
}

#[test]
fn test_specific_pattern_shadows_general() {
    let sql = "select * from users where is_carrier = true";
    let result = simulate(sql, PageContext::DatabaseSetup);
    let rows = result.rows().expect("rows");
    assert_eq!(rows.len(), 2);
    for i in 0..rows.len() {
        assert!(rows.get(i, "is_shipper").is_none());
    }
}

#[test]
fn test_rows_have_uniform_columns() {
    for sql in ["SELECT * FROM users", "SELECT * FROM users WHERE is_carrier", "select 1"] {
        for page in PageContext::ALL {
            if let Some(rows) = simulate(sql, page).rows() {
                for row in rows.rows() {
                    assert_eq!(row.len(), rows.columns().len());
                }
            }
        }
    }
}

#[test]
fn test_create_table_on_every_page() {
    for page in PageContext::ALL {
        assert_eq!(simulate("CREATE TABLE foo (id INT);", page), SimulatedResultSet::Success);
    }
}

#[test]
fn test_unmatched_input_gets_demo_note() {
    let result = simulate("VACUUM ANALYZE;", PageContext::General);
    assert_eq!(result, SimulatedResultSet::Error(DEMO_NOTE.to_string()));
}
