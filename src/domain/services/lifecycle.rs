use chrono::{DateTime, Utc};

use crate::domain::models::festival::{Festival, FestivalPatch};
use crate::domain::models::show::{Show, ShowPatch};
use crate::error::AppError;

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_festival(festival: &Festival) -> Result<(), AppError> {
    require(&festival.name, "name")?;
    require(&festival.description, "description")?;
    require(&festival.user_id, "user_id")?;
    require(&festival.country, "country")?;
    require(&festival.city, "city")?;

    if festival.languages.is_empty() {
        return Err(AppError::Validation("at least one language is required".into()));
    }
    // Inclusive: single-day festivals with date_until == date_from are fine.
    if festival.date_until < festival.date_from {
        return Err(AppError::Validation("date_until must not be before date_from".into()));
    }

    Ok(())
}

pub fn validate_show(show: &Show) -> Result<(), AppError> {
    require(&show.name, "name")?;
    require(&show.description, "description")?;
    require(&show.user_id, "user_id")?;

    if show.groups.is_empty() {
        return Err(AppError::Validation("at least one performing group is required".into()));
    }
    if let Some(doors_open) = show.doors_open {
        if show.show_starts < doors_open {
            return Err(AppError::Validation("show_starts must not be before doors_open".into()));
        }
    }

    Ok(())
}

/// Applies a sparse patch to a stored festival. Fields the patch left out
/// (or sent as `null`) keep their stored value, `false` booleans go
/// through, and `updated_at` is always restamped. `id` and `user_id` are
/// not part of the patch shape and stay as stored.
pub fn apply_festival_patch(festival: &mut Festival, patch: FestivalPatch, now: DateTime<Utc>) {
    if let Some(val) = patch.name { festival.name = val; }
    if let Some(val) = patch.country { festival.country = val; }
    if let Some(val) = patch.city { festival.city = val; }
    if let Some(val) = patch.date_from { festival.date_from = val; }
    if let Some(val) = patch.date_until { festival.date_until = val; }
    if let Some(val) = patch.website { festival.website = Some(val); }
    if let Some(val) = patch.instagram { festival.instagram = Some(val); }
    if let Some(val) = patch.poster { festival.poster = Some(val); }
    if let Some(val) = patch.description { festival.description = val; }
    if let Some(val) = patch.slogan { festival.slogan = Some(val); }
    if let Some(val) = patch.languages { festival.languages = val; }
    if let Some(val) = patch.accommodation_offered { festival.accommodation_offered = val; }
    if let Some(val) = patch.mixer_shows { festival.mixer_shows = val; }

    festival.updated_at = now;
}

/// Same rules as `apply_festival_patch`.
pub fn apply_show_patch(show: &mut Show, patch: ShowPatch, now: DateTime<Utc>) {
    if let Some(val) = patch.name { show.name = val; }
    if let Some(val) = patch.show_starts { show.show_starts = val; }
    if let Some(val) = patch.doors_open { show.doors_open = Some(val); }
    if let Some(val) = patch.website { show.website = Some(val); }
    if let Some(val) = patch.instagram { show.instagram = Some(val); }
    if let Some(val) = patch.poster { show.poster = Some(val); }
    if let Some(val) = patch.description { show.description = val; }
    if let Some(val) = patch.slogan { show.slogan = Some(val); }
    if let Some(val) = patch.email { show.email = Some(val); }
    if let Some(val) = patch.groups { show.groups = val; }
    if let Some(val) = patch.tickets_link { show.tickets_link = Some(val); }
    if let Some(val) = patch.location_name { show.location_name = Some(val); }
    if let Some(val) = patch.location_link { show.location_link = Some(val); }
    if let Some(val) = patch.ticket_price { show.ticket_price = Some(val); }

    show.updated_at = now;
}
