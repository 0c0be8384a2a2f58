use data_profile::Profile;

use crate::error::AppError;

const NO_VALUE: &str = "-";

/// Print profiles as width-aligned columns: id, name, city, profession,
/// location.
pub fn print_table(profiles: &[&Profile]) {
    let longest_id = column_width(profiles, |p| p.id.as_str().len());
    let longest_name = column_width(profiles, |p| p.name.len());
    let longest_city = column_width(profiles, |p| {
        p.city.as_deref().unwrap_or(NO_VALUE).len()
    });
    let longest_profession = column_width(profiles, |p| {
        p.profession.as_deref().unwrap_or(NO_VALUE).len()
    });

    for profile in profiles {
        let location = profile
            .location
            .map(|point| point.to_string())
            .unwrap_or_else(|| NO_VALUE.to_owned());
        println!(
            "{:id_width$} {:name_width$} {:city_width$} {:profession_width$} {}",
            profile.id.as_str(),
            profile.name,
            profile.city.as_deref().unwrap_or(NO_VALUE),
            profile.profession.as_deref().unwrap_or(NO_VALUE),
            location,
            id_width = longest_id,
            name_width = longest_name,
            city_width = longest_city,
            profession_width = longest_profession,
        );
    }
}

/// Print every present field of one profile, one per line.
pub fn print_details(profile: &Profile) {
    println!("id:          {}", profile.id);
    println!("name:        {}", profile.name);
    println!("image:       {}", profile.image);
    println!("description: {}", profile.description);
    println!("address:     {}", profile.address);
    if let Some(email) = &profile.email {
        println!("email:       {}", email);
    }
    if let Some(phone) = &profile.phone {
        println!("phone:       {}", phone);
    }
    if let Some(profession) = &profile.profession {
        println!("profession:  {}", profession);
    }
    if let Some(city) = &profile.city {
        println!("city:        {}", city);
    }
    if !profile.interests.is_empty() {
        println!("interests:   {}", profile.interests.join(", "));
    }
    if let Some(twitter) = &profile.socials.twitter {
        println!("twitter:     {}", twitter);
    }
    if let Some(linkedin) = &profile.socials.linkedin {
        println!("linkedin:    {}", linkedin);
    }
    if let Some(facebook) = &profile.socials.facebook {
        println!("facebook:    {}", facebook);
    }
    match &profile.location {
        Some(point) => println!("location:    {}", point),
        None => println!("location:    (not geocoded)"),
    }
}

pub fn print_json(profiles: &[&Profile]) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(profiles)?);
    Ok(())
}

fn column_width(profiles: &[&Profile], width: impl Fn(&Profile) -> usize) -> usize {
    profiles
        .iter()
        .map(|profile| width(profile))
        .max()
        .unwrap_or(0)
}
