use mymdb_catalog::*;

#[test]
fn new_movie_defaults() {
    let movie = Movie::new("Dune", "2021", 155, Mpaa::Pg13);
    assert_eq!(movie.rating, None);
    assert!(!movie.watched);
    assert!(!movie.owned);
    assert!(movie.credits.is_none());
    assert!(movie.directors().is_empty());
}

#[test]
fn builder_sets_flags() {
    let movie = Movie::new("Dune", "2021", 155, Mpaa::Pg13)
        .with_rating(8.0)
        .watched(true)
        .owned(true);
    assert_eq!(movie.rating, Some(8.0));
    assert!(movie.watched);
    assert!(movie.owned);
}

#[test]
fn credits_by_role() {
    let credits = Credits {
        cast: vec!["Rebecca Ferguson".to_string()],
        directors: vec!["Denis Villeneuve".to_string()],
        ..Credits::default()
    };
    assert_eq!(credits.for_role(Role::Actor), ["Rebecca Ferguson"]);
    assert_eq!(credits.for_role(Role::Director), ["Denis Villeneuve"]);
    assert!(credits.for_role(Role::Writer).is_empty());

    let mut movie = Movie::new("Dune", "2021", 155, Mpaa::Pg13);
    movie.credits = Some(credits);
    assert_eq!(movie.cast(), ["Rebecca Ferguson"]);
    assert_eq!(movie.directors(), ["Denis Villeneuve"]);
    assert!(movie.writers().is_empty());
}

#[test]
fn mpaa_codes_parse_and_display() {
    for mpaa in Mpaa::ALL {
        assert_eq!(mpaa.as_str().parse::<Mpaa>(), Ok(mpaa));
        assert_eq!(mpaa.to_string(), mpaa.as_str());
    }
    assert_eq!("PG-13".parse::<Mpaa>(), Ok(Mpaa::Pg13));
    assert_eq!(
        "pg-13".parse::<Mpaa>(),
        Err(ParseMpaaError("pg-13".to_string()))
    );
}

#[test]
fn role_parse_and_display() {
    assert_eq!("director".parse::<Role>(), Ok(Role::Director));
    assert_eq!(Role::Writer.to_string(), "writer");
    assert!("producer".parse::<Role>().is_err());
    assert!("Actor".parse::<Role>().is_err());
}

#[test]
fn person_shorthands() {
    assert_eq!(Person::actor("A"), Person::new("A", Role::Actor));
    assert_eq!(Person::director("B").role, Role::Director);
    assert_eq!(Person::writer("C").role, Role::Writer);
    assert_ne!(Person::actor("Clint Eastwood"), Person::director("Clint Eastwood"));
}

#[test]
fn movie_json_uses_codes() {
    let movie = Movie::new("Alien", "1979", 117, Mpaa::R);
    let json = serde_json::to_value(&movie).unwrap();
    assert_eq!(json["mpaa"], "R");
    assert!(json.get("credits").is_none());

    let person = serde_json::to_value(Person::writer("Dan O'Bannon")).unwrap();
    assert_eq!(person["role"], "writer");

    let parsed: Movie = serde_json::from_str(
        r#"{"title":"Alien","year":"1979","runtime":117,"mpaa":"R"}"#,
    )
    .unwrap();
    assert_eq!(parsed, movie);
}
