use chrono::NaiveDate;
use serde_json::Value;

use super::types::{MovieBody, ReviewBody, ValidationError};
use crate::db::{MovieFields, NewReview};

/// Check every review field and collect all failures, so a single 400 can
/// name each offending field. Numeric fields also accept numeric strings,
/// matching what HTML form clients send.
pub fn validate_review(body: &ReviewBody) -> Result<NewReview, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let pelicula_id = match body.pelicula_id.as_ref().and_then(as_integer) {
        Some(id) => Some(id),
        None => {
            errors.push(ValidationError::field("PeliculaID", body.pelicula_id.as_ref()));
            None
        }
    };

    let autor = match body.autor.as_ref().and_then(as_string) {
        Some(s) => Some(s),
        None => {
            errors.push(ValidationError::field("Autor", body.autor.as_ref()));
            None
        }
    };

    let puntuacion = match body.puntuacion.as_ref().and_then(as_float) {
        Some(p) if (0.0..=10.0).contains(&p) => Some(p),
        _ => {
            errors.push(ValidationError::field("Puntuacion", body.puntuacion.as_ref()));
            None
        }
    };

    let comentario = match body.comentario.as_ref().and_then(as_string) {
        Some(s) => Some(s),
        None => {
            errors.push(ValidationError::field("Comentario", body.comentario.as_ref()));
            None
        }
    };

    let fecha = match body.fecha.as_ref().and_then(as_date) {
        Some(d) => Some(d),
        None => {
            errors.push(ValidationError::field("Fecha", body.fecha.as_ref()));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewReview {
        pelicula_id: pelicula_id.unwrap(),
        autor: autor.unwrap(),
        puntuacion: puntuacion.unwrap(),
        comentario: comentario.unwrap(),
        fecha: fecha.unwrap(),
    })
}

/// PUT /Peliculas requires all nine fields present, with non-empty strings
/// and finite numbers. Returns the fields only when everything checks out.
pub fn validate_movie_update(body: &MovieBody) -> Option<MovieFields> {
    let non_empty = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
    let finite = |n: &Option<f64>| n.is_some_and(f64::is_finite);

    if !non_empty(&body.titulo)
        || !non_empty(&body.fecha_estreno)
        || !finite(&body.presupuesto)
        || !finite(&body.recaudacion)
        || body.director.is_none()
        || body.categoria.is_none()
        || body.duracion.is_none()
        || !non_empty(&body.sinopsis)
        || !non_empty(&body.poster)
    {
        return None;
    }

    Some(movie_fields(body))
}

/// Straight carry-over of the body fields; missing ones stay None and are
/// bound as NULL by the repository.
pub fn movie_fields(body: &MovieBody) -> MovieFields {
    MovieFields {
        titulo: body.titulo.clone(),
        fecha_estreno: body.fecha_estreno.clone(),
        presupuesto: body.presupuesto,
        recaudacion: body.recaudacion,
        director: body.director,
        categoria: body.categoria,
        duracion: body.duracion,
        sinopsis: body.sinopsis.clone(),
        poster: body.poster.clone(),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(|s| s.to_string())
}

fn as_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_review() -> ReviewBody {
        ReviewBody {
            pelicula_id: Some(json!(1)),
            autor: Some(json!("Ana")),
            puntuacion: Some(json!(8.5)),
            comentario: Some(json!("Great")),
            fecha: Some(json!("2024-01-01")),
        }
    }

    #[test]
    fn accepts_valid_review() {
        let review = validate_review(&valid_review()).unwrap();
        assert_eq!(review.pelicula_id, 1);
        assert_eq!(review.autor, "Ana");
        assert_eq!(review.puntuacion, 8.5);
        assert_eq!(review.fecha, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn rejects_score_out_of_range() {
        let mut body = valid_review();
        body.puntuacion = Some(json!(15));
        let errors = validate_review(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "Puntuacion");
    }

    #[test]
    fn rejects_negative_score() {
        let mut body = valid_review();
        body.puntuacion = Some(json!(-0.5));
        let errors = validate_review(&body).unwrap_err();
        assert_eq!(errors[0].path, "Puntuacion");
    }

    #[test]
    fn accepts_boundary_scores() {
        for score in [0.0, 10.0] {
            let mut body = valid_review();
            body.puntuacion = Some(json!(score));
            assert!(validate_review(&body).is_ok(), "score {} should pass", score);
        }
    }

    #[test]
    fn collects_all_failures() {
        let body = ReviewBody {
            pelicula_id: Some(json!("abc")),
            autor: Some(json!(42)),
            puntuacion: None,
            comentario: Some(json!("ok")),
            fecha: Some(json!("01/01/2024")),
        };
        let errors = validate_review(&body).unwrap_err();
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["PeliculaID", "Autor", "Puntuacion", "Fecha"]);
    }

    #[test]
    fn accepts_numeric_strings() {
        let mut body = valid_review();
        body.pelicula_id = Some(json!("7"));
        body.puntuacion = Some(json!("9.5"));
        let review = validate_review(&body).unwrap();
        assert_eq!(review.pelicula_id, 7);
        assert_eq!(review.puntuacion, 9.5);
    }

    fn full_movie() -> MovieBody {
        MovieBody {
            titulo: Some("Amores Perros".to_string()),
            fecha_estreno: Some("2000-06-16".to_string()),
            presupuesto: Some(2_000_000.0),
            recaudacion: Some(20_000_000.0),
            director: Some(3),
            categoria: Some(1),
            duracion: Some(154),
            sinopsis: Some("Tres historias".to_string()),
            poster: Some("/posters/amores.jpg".to_string()),
        }
    }

    #[test]
    fn accepts_complete_movie_update() {
        let fields = validate_movie_update(&full_movie()).unwrap();
        assert_eq!(fields.titulo.as_deref(), Some("Amores Perros"));
        assert_eq!(fields.duracion, Some(154));
    }

    #[test]
    fn rejects_missing_numeric_field() {
        let mut body = full_movie();
        body.presupuesto = None;
        assert!(validate_movie_update(&body).is_none());
    }

    #[test]
    fn rejects_empty_title() {
        let mut body = full_movie();
        body.titulo = Some(String::new());
        assert!(validate_movie_update(&body).is_none());
    }

    #[test]
    fn insert_fields_pass_through_missing_values() {
        let body = MovieBody {
            titulo: Some("Sin datos".to_string()),
            ..Default::default()
        };
        let fields = movie_fields(&body);
        assert_eq!(fields.titulo.as_deref(), Some("Sin datos"));
        assert!(fields.presupuesto.is_none());
        assert!(fields.poster.is_none());
    }
}
