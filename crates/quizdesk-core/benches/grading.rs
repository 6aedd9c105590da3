use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdesk_core::grader::{grade, is_correct, parse_numeric_answer};
use quizdesk_core::model::{ExpectedAnswer, Question, Quiz};

fn make_quiz(questions: usize) -> Quiz {
    Quiz {
        id: 0,
        title: "bench".into(),
        description: String::new(),
        questions: (0..questions)
            .map(|i| Question {
                id: format!("q{i}"),
                prompt: String::new(),
                points: 5,
                expected: if i % 2 == 0 {
                    ExpectedAnswer::Text("Share Premium 25,000".into())
                } else {
                    ExpectedAnswer::Numerical(213000.0)
                },
                answer_format: None,
            })
            .collect(),
    }
}

fn make_answers(questions: usize) -> HashMap<String, String> {
    (0..questions)
        .map(|i| {
            let answer = if i % 2 == 0 {
                "Cash 125,000, Ordinary Share Capital 100,000, Share Premium 25,000"
            } else {
                "$213,000.00"
            };
            (format!("q{i}"), answer.to_string())
        })
        .collect()
}

fn bench_single_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_correct");
    let text = ExpectedAnswer::Text("Share Premium 25,000".into());
    let number = ExpectedAnswer::Numerical(213000.0);

    group.bench_function("text_embedded", |b| {
        b.iter(|| {
            is_correct(
                black_box(&text),
                black_box("Jan 2: Cash 125,000, Ordinary Share Capital 100,000, Share Premium 25,000"),
            )
        })
    });

    group.bench_function("numerical_currency", |b| {
        b.iter(|| is_correct(black_box(&number), black_box("$213,000.00")))
    });

    group.bench_function("numerical_garbage", |b| {
        b.iter(|| parse_numeric_answer(black_box("two hundred thousand")))
    });

    group.finish();
}

fn bench_grade_quiz(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    for size in [2, 20, 200] {
        let quiz = make_quiz(size);
        let answers = make_answers(size);
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| grade(black_box(&quiz), black_box(&answers)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_answer, bench_grade_quiz);
criterion_main!(benches);
