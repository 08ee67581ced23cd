//! Record assembly.
//!
//! Field lists arrive in document order with whatever length the page gave
//! them. This is the one place they are brought to the batch size: short
//! lists are padded with empty strings (and the shortfall recorded), long
//! lists are truncated. Posts are then built position by position.

use crate::models::{Batch, Field, FieldValues, Post, Shortfall};
use itertools::izip;
use tracing::{instrument, warn};

/// Align `values` into exactly `expected` posts.
///
/// `batch.posts[i]` takes the i-th title, date and description. Missing
/// positions become `""` and each padded field is listed in
/// `batch.shortfalls`.
#[instrument(level = "debug", skip(values))]
pub fn assemble(values: FieldValues, expected: usize) -> Batch {
    let FieldValues {
        titles,
        dates,
        descriptions,
    } = values;

    let mut shortfalls = Vec::new();
    let titles = fit(titles, Field::Title, expected, &mut shortfalls);
    let dates = fit(dates, Field::Date, expected, &mut shortfalls);
    let descriptions = fit(descriptions, Field::Description, expected, &mut shortfalls);

    let posts = izip!(titles, dates, descriptions)
        .map(|(title, date, description)| Post {
            title,
            description,
            date,
        })
        .collect();

    Batch { posts, shortfalls }
}

fn fit(
    mut list: Vec<String>,
    field: Field,
    expected: usize,
    shortfalls: &mut Vec<Shortfall>,
) -> Vec<String> {
    let found = list.len();
    if found < expected {
        warn!(%field, found, expected, "Page listed fewer entries than expected; padding");
        shortfalls.push(Shortfall {
            field,
            found,
            expected,
        });
    }
    list.resize(expected, String::new());
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractOptions, POSTS_PER_PAGE};
    use crate::scrapers::extract::extract;
    use crate::scrapers::extract::tests::{cybersecuritynews_page, hackernews_page};
    use crate::scrapers::profile::{Site, profile_for};

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix} {i}")).collect()
    }

    fn values(titles: usize, dates: usize, descriptions: usize) -> FieldValues {
        FieldValues {
            titles: numbered("t", titles),
            dates: numbered("d", dates),
            descriptions: numbered("s", descriptions),
        }
    }

    #[test]
    fn test_exact_lengths_zip_positionally() {
        let batch = assemble(values(10, 10, 10), 10);

        assert_eq!(batch.len(), 10);
        assert!(batch.is_complete());
        for (i, post) in batch.posts.iter().enumerate() {
            assert_eq!(post.title, format!("t {i}"));
            assert_eq!(post.date, format!("d {i}"));
            assert_eq!(post.description, format!("s {i}"));
        }
    }

    #[test]
    fn test_batch_size_is_fixed_for_any_input_length() {
        for (t, d, s) in [(0, 0, 0), (3, 10, 25), (10, 7, 10), (40, 40, 40)] {
            let batch = assemble(values(t, d, s), POSTS_PER_PAGE);
            assert_eq!(batch.len(), POSTS_PER_PAGE, "input ({t}, {d}, {s})");
        }
    }

    #[test]
    fn test_long_lists_are_truncated_without_shortfall() {
        let batch = assemble(values(12, 15, 11), 10);

        assert_eq!(batch.len(), 10);
        assert!(batch.shortfalls.is_empty());
        assert_eq!(batch.posts[9].title, "t 9");
    }

    #[test]
    fn test_short_lists_are_padded_and_recorded() {
        let batch = assemble(values(7, 10, 4), 10);

        assert_eq!(batch.posts[6].title, "t 6");
        for post in &batch.posts[7..] {
            assert_eq!(post.title, "");
        }
        assert_eq!(batch.posts[3].description, "s 3");
        assert_eq!(batch.posts[4].description, "");
        assert_eq!(
            batch.shortfalls,
            vec![
                Shortfall {
                    field: Field::Title,
                    found: 7,
                    expected: 10
                },
                Shortfall {
                    field: Field::Description,
                    found: 4,
                    expected: 10
                },
            ]
        );
    }

    #[test]
    fn test_page_scenario_first_and_last_posts() {
        let doc = hackernews_page(10, 10);
        let extracted = extract(
            &doc,
            profile_for(Site::TheHackerNews),
            ExtractOptions::default(),
            POSTS_PER_PAGE,
        )
        .unwrap();
        let batch = assemble(extracted, POSTS_PER_PAGE);

        assert_eq!(batch.len(), 10);
        assert_eq!(
            batch.posts[0],
            Post {
                title: "Title 0".into(),
                description: "Description 0".into(),
                date: "Date 0".into(),
            }
        );
        assert_eq!(
            batch.posts[9],
            Post {
                title: "Title 9".into(),
                description: "Description 9".into(),
                date: "Date 9".into(),
            }
        );
    }

    #[test]
    fn test_page_scenario_date_excluded() {
        let doc = hackernews_page(10, 10);
        let options = ExtractOptions {
            exclude_date: true,
            exclude_description: false,
        };
        let extracted =
            extract(&doc, profile_for(Site::TheHackerNews), options, POSTS_PER_PAGE).unwrap();
        let batch = assemble(extracted, POSTS_PER_PAGE);

        assert!(batch.is_complete());
        for (i, post) in batch.posts.iter().enumerate() {
            assert_eq!(post.date, "");
            assert_eq!(post.title, format!("Title {i}"));
            assert_eq!(post.description, format!("Description {i}"));
        }
    }

    #[test]
    fn test_excluded_field_is_not_a_shortfall_for_any_batch_size() {
        let doc = hackernews_page(12, 12);
        let options = ExtractOptions {
            exclude_date: true,
            exclude_description: false,
        };
        let extracted = extract(&doc, profile_for(Site::TheHackerNews), options, 12).unwrap();
        let batch = assemble(extracted, 12);

        assert_eq!(batch.len(), 12);
        assert!(batch.is_complete(), "shortfalls: {:?}", batch.shortfalls);
        assert!(batch.posts.iter().all(|p| p.date.is_empty()));
        assert_eq!(batch.posts[11].description, "Description 11");
    }

    #[test]
    fn test_cybersecuritynews_first_and_last_posts_align() {
        let extracted = extract(
            &cybersecuritynews_page(10),
            profile_for(Site::CybersecurityNews),
            ExtractOptions::default(),
            POSTS_PER_PAGE,
        )
        .unwrap();
        let batch = assemble(extracted, POSTS_PER_PAGE);

        assert!(batch.is_complete());
        assert_eq!(
            batch.posts[0],
            Post {
                title: "Title 0".into(),
                description: "Excerpt 0".into(),
                date: "Date 0".into(),
            }
        );
        assert_eq!(
            batch.posts[9],
            Post {
                title: "Title 9".into(),
                description: "Excerpt 9".into(),
                date: "Date 9".into(),
            }
        );
    }

    #[test]
    fn test_page_scenario_seven_titles() {
        let doc = hackernews_page(7, 10);
        let extracted = extract(
            &doc,
            profile_for(Site::TheHackerNews),
            ExtractOptions::default(),
            POSTS_PER_PAGE,
        )
        .unwrap();
        let batch = assemble(extracted, POSTS_PER_PAGE);

        assert_eq!(batch.len(), 10);
        for post in &batch.posts[7..10] {
            assert_eq!(post.title, "");
        }
        assert!(batch.shortfalls.contains(&Shortfall {
            field: Field::Title,
            found: 7,
            expected: 10
        }));
    }

    #[test]
    fn test_extract_then_assemble_is_bit_identical_across_runs() {
        let doc = hackernews_page(10, 8);
        let profile = profile_for(Site::TheHackerNews);
        let run = || {
            let values = extract(&doc, profile, ExtractOptions::default(), 10).unwrap();
            assemble(values, 10)
        };

        let first = run();
        for _ in 0..10 {
            assert_eq!(run(), first);
        }
    }
}
