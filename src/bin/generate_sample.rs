//! Writes a small sample dataset to `db/substations.xml`.
//!
//! The layout mirrors the real feed: `sst` elements nested under per-region
//! wrappers, voltage lists with duplicates, a trailing comma, a fractional
//! generator voltage and one planned site with no voltages yet.

struct Site {
    desc: &'static str,
    geo: &'static str,
    name: &'static str,
    lat: &'static str,
    lon: &'static str,
    path: &'static str,
    vls: &'static str,
}

const SITES: &[Site] = &[
    Site {
        desc: "Stacja 400/220/110 kV",
        geo: "mazowieckie",
        name: "Mościska",
        lat: "52.288",
        lon: "20.861",
        path: "sst/moscicka",
        vls: "400,220,110",
    },
    Site {
        desc: "Stacja 400/220/110 kV",
        geo: "mazowieckie",
        name: "Miłosna",
        lat: "52.211",
        lon: "21.313",
        path: "sst/milosna",
        vls: "400,220,110",
    },
    Site {
        desc: "Stacja 110/10 kV",
        geo: "mazowieckie",
        name: "Mory",
        lat: "52.214",
        lon: "20.873",
        path: "sst/mory",
        vls: "110,10",
    },
    Site {
        desc: "Stacja 400/110 kV",
        geo: "mazowieckie",
        name: "Płock",
        lat: "52.562",
        lon: "19.686",
        path: "sst/plock",
        vls: "400,110",
    },
    Site {
        desc: "Stacja przyelektrowniana 400/220/110 kV",
        geo: "łódzkie",
        name: "Rogowiec",
        lat: "51.266",
        lon: "19.321",
        path: "sst/rogowiec",
        vls: "400,220,220,110",
    },
    Site {
        desc: "Stacja 220/110/15 kV",
        geo: "łódzkie",
        name: "Janów",
        lat: "51.775",
        lon: "19.489",
        path: "sst/janow",
        vls: "220,110,15",
    },
    Site {
        desc: "Stacja 750/400 kV",
        geo: "podkarpackie",
        name: "Widełka",
        lat: "50.237",
        lon: "21.952",
        path: "sst/widelka",
        vls: "750,400,",
    },
    Site {
        desc: "Stacja planowana",
        geo: "podkarpackie",
        name: "Podborze",
        lat: "50.021",
        lon: "21.431",
        path: "sst/podborze",
        vls: "",
    },
    Site {
        desc: "Stacja 400/110 kV",
        geo: "pomorskie",
        name: "Gdańsk Błonia",
        lat: "54.318",
        lon: "18.712",
        path: "sst/gdansk-blonia",
        vls: "400,110",
    },
    Site {
        desc: "Stacja 400/220/110 kV",
        geo: "kujawsko-pomorskie",
        name: "Grudziądz Węgrowo",
        lat: "53.461",
        lon: "18.796",
        path: "sst/grudziadz",
        vls: "400,220,110",
    },
    Site {
        desc: "Stacja przyelektrowniana 400/220/110 kV",
        geo: "zachodniopomorskie",
        name: "Krajnik",
        lat: "53.034",
        lon: "14.474",
        path: "sst/krajnik",
        vls: "400,220,110",
    },
    Site {
        desc: "Stacja 400/220/110 kV",
        geo: "warmińsko-mazurskie",
        name: "Olsztyn Mątki",
        lat: "53.826",
        lon: "20.383",
        path: "sst/olsztyn-matki",
        vls: "400,220,110",
    },
    Site {
        desc: "Stacja 400/110/15.75 kV",
        geo: "warmińsko-mazurskie",
        name: "Ełk Bis",
        lat: "53.843",
        lon: "22.379",
        path: "sst/elk-bis",
        vls: "400,110,15.75",
    },
];

fn main() {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<grid country=\"PL\">\n");

    // Group sites under region wrappers, in first-seen order.
    let mut regions: Vec<&str> = Vec::new();
    for site in SITES {
        if !regions.contains(&site.geo) {
            regions.push(site.geo);
        }
    }

    for region in regions {
        xml.push_str(&format!("  <region name=\"{region}\">\n"));
        for site in SITES.iter().filter(|s| s.geo == region) {
            xml.push_str(&format!(
                "    <sst desc=\"{}\" geo=\"{}\" name=\"{}\" lat=\"{}\" lon=\"{}\" path=\"{}\" vls=\"{}\"/>\n",
                site.desc, site.geo, site.name, site.lat, site.lon, site.path, site.vls
            ));
        }
        xml.push_str("  </region>\n");
    }

    xml.push_str("</grid>\n");

    std::fs::create_dir_all("db").expect("Failed to create db directory");
    let output_path = "db/substations.xml";
    std::fs::write(output_path, &xml).expect("Failed to write output file");

    println!("Wrote {} substation records to {output_path}", SITES.len());
}
