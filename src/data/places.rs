// ---------------------------------------------------------------------------
// PlacePoint – static map markers
// ---------------------------------------------------------------------------

/// A named geographic coordinate shown on the treatment-centre map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacePoint {
    pub name: &'static str,
    /// Degrees north, in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees east, in `[-180, 180]`.
    pub longitude: f64,
}

impl PlacePoint {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

/// Breast cancer treatment centres across India.
pub const TREATMENT_CENTERS: &[PlacePoint] = &[
    PlacePoint::new("Guru Kirpa, Best Rehab Center in Punjab", 31.096134, 75.778770),
    PlacePoint::new("Ruby Hall Clinic Wanowrie, Maharashtra, India", 18.485870, 73.905853),
    PlacePoint::new("Fortis Memorial Research Institute, Gurgaon, India", 28.456789, 77.072472),
    PlacePoint::new("Ahmedabad Civil Hospital, Ahmedabad, Gujarat, India", 23.053967, 72.603844),
    PlacePoint::new("Aakrithi Hospital, Vijayawada, Andhra Pradesh, India", 16.511965, 80.633163),
    PlacePoint::new("VOC Port Trust Hospital, Muttayyapuram, Tamil Nadu , India", 8.749402, 78.168137),
    PlacePoint::new("Vihar Hospital, Anand, Gujarat, India", 22.554609, 72.967361),
    PlacePoint::new("Advanced Centre for Eyes, Kitchlu Nagar, Ludhiana, Punjab, India", 30.912411, 75.819412),
    PlacePoint::new("Delhi Heart Hospital, Jagriti Enclave, Anand Vihar, Delhi, India", 28.653229, 77.308601),
    PlacePoint::new("Nighasan Hospital, Nighasan, Uttar Pradesh, India", 28.231674, 80.862534),
    PlacePoint::new("Apple Hospital, Surat, Gujarat, India", 21.182947, 72.831581),
    PlacePoint::new("Primary Health Centre, Gejjalagere, Karnataka, India", 12.571047, 77.001183),
    PlacePoint::new("32 Smile Stone Dental Clinic, New Delhi, Delhi, India", 28.575552, 77.262192),
    PlacePoint::new("Veterinary Polyclinic, Hoshiarpur, Punjab, India", 31.524620, 75.902008),
    PlacePoint::new("Hashmika Child Clinic, Visakhapatnam, Andhra Pradesh, India", 17.733288, 83.275429),
    PlacePoint::new("Padmini Nursing Home, Chetpet, Chennai, Tamil Nadu, India", 13.072790, 80.234421),
    PlacePoint::new("Subham Diagnostic & Polyclinic, Rajhati, West Bengal, India", 22.674788, 87.827484),
    PlacePoint::new("Smile Art Dental Clinic, Ravet, Pimpri-Chinchwad, Maharashtra, India", 18.643318, 73.756042),
    PlacePoint::new("Asilo Hospital, Mapusa, Goa, India", 15.589379, 73.816574),
    PlacePoint::new("General Hospital, Jangipara, Hooghly, West Bangali, India", 22.742229, 88.051460),
    PlacePoint::new("Western India Institute Of Neurosciences, Nagala Park, Kolhapur, Maharashtra, India", 16.709822, 74.227463),
    PlacePoint::new("MGM Hospital and Research Center, Katni, Madhya Pradesh, India", 23.830975, 80.407120),
    PlacePoint::new("Primary Health Care Center, Pataka, Athmallik, Odisha, India", 20.651484, 84.629814),
    PlacePoint::new("Jyotirmayee Medicine Store, Pataka, Athmallik, Odisha, India", 20.650694, 84.631775),
    PlacePoint::new("Androbest Andrology & Urology Center, Sai Nagar, LB Nagar, Hyderabad, Telangana, India", 17.357861, 78.557442),
    PlacePoint::new("ADORN Cosmetic Clinic, Ahmedabad, Gujarat, India", 23.025570, 72.527458),
    PlacePoint::new("Vignesh Hospital, Porur, Ramapuram, Chennai, Tamil Nadu, India", 13.030947, 80.171585),
    PlacePoint::new("Chennai Jayanth Acupuncture Hospital, Anna Nagar, Chennai, Tamil Nadu, India", 13.095658, 80.206116),
    PlacePoint::new("Srinivas Priya Hospital Pvt Ltd, Patel Road, Perambur, Chennai, India", 13.109593, 80.246666),
    PlacePoint::new("RELAX Hospital, Cuttack, Orrisa, Odisha, India", 20.457838, 85.871536),
    PlacePoint::new("Governmental Hospital, Bachannapet, Telangana, India", 17.786711, 79.026970),
    PlacePoint::new("Governmental Hospital of Thalaivasal, Thalaivasal, Tamil Nadu, India", 11.578299, 78.753654),
    PlacePoint::new("Dr deepa shama's DEEP Hospital, Hathras, Uttar Pradesh, India", 27.597265, 78.045441),
    PlacePoint::new("Aark Foundation, Donje Phata, Pune, Maharashtra, India", 18.399286, 73.769058),
    PlacePoint::new("Sant Blood Bank, Jhansi, Uttar Pradesh, India", 25.458599, 78.615517),
    PlacePoint::new("Riddhi Siddhi CHS, Borivali West, Mumbai, Maharashtra, India", 19.227650, 72.840012),
    PlacePoint::new("MAURYA Eye Care Center, Manikpur, Uttar Pradesh, India", 25.766827, 81.414467),
    PlacePoint::new("Dental Panacea, Faridabad, Hayrana, India", 28.386002, 77.307678),
    PlacePoint::new("Srirangam Government Hospital, Tiruchirappalli, Tamil Nadu, India", 10.857012, 78.691162),
    PlacePoint::new("Bairabi hospital, Bairabi, Mizoram, India", 24.184324, 92.533638),
    PlacePoint::new("Khuangpuilam Clinic, Kolasib, Mizoram, India", 24.209656, 92.679642),
    PlacePoint::new("Nityanand Hospital, Katraj, Pune, Maharashtra, India", 18.457527, 73.867668),
    PlacePoint::new("Hojai Civil Hospital, Hojai, Assam, India", 26.001802, 92.848373),
    PlacePoint::new("Apollo BSR Hospital, Bhilai Nagar, Chhattisgarh, India", 21.216276, 81.323608),
    PlacePoint::new("Usha Vision Care, Srirampura, Bengaluru, Karnataka, India", 12.996090, 77.569672),
    PlacePoint::new("Keshav Madhav Blood Bank, Bareilly, Uttar Pradesh, India", 28.367180, 79.430153),
    PlacePoint::new("Mukta Dental Clinic, Shahid Bhagat Singh Nagar, Rajasthan, India", 24.558990, 73.722801),
    PlacePoint::new("MJM Hospital, Shivajinagar, Pune, Maharashtra, India", 18.524338, 73.843887),
    PlacePoint::new("Sarthak Manav Kusthashram, Jhotwara, Jaipur, Rajasthan, India", 26.940351, 75.769493),
    PlacePoint::new("Janta Clinic, Sector 3, Jaipur, Rajasthan, India", 26.889633, 75.839554),
    PlacePoint::new("Pashu Hospital Maheshwar, Maheshwar, Madhya Pradesh, India", 22.179298, 75.586754),
    PlacePoint::new("Sagar Hospital, KumaraSwamy layout, Bangalore, Karnataka, India", 12.907950, 77.565063),
    PlacePoint::new("Dr.Shruthi and Dr.Rajesh Patil, Rajatagiri, Dharwad, Karnataka, India", 15.437003, 75.015060),
    PlacePoint::new("UHP District General Hospital, Armavti, Maharashtra, India", 20.933424, 77.761139),
    PlacePoint::new("MGM Hospital, CBD Belapur, Mumbai, Maharashtra, India", 19.025806, 73.041550),
    PlacePoint::new("Pramathana Dental Care, Ideal Homes TWP, Bengaluru, Karnataka, India", 12.923236, 77.518456),
    PlacePoint::new("Joshi Hospital, Dabhade, Pune, Maharashtra, India", 18.970409, 76.753838),
    PlacePoint::new("Rural Hospital Solankur, Solankur, Maharashtra, India", 16.413506, 74.050575),
    PlacePoint::new("32 Gems Dental Care, Dosarka, Punjab, India", 31.697235, 75.788933),
    PlacePoint::new("Subham hospital, Mendarda, Sardarbag, Junagadh, Gujarat, India", 21.323082, 70.441826),
    PlacePoint::new("Hiranandani Hospital, Thane West, Mumbai, Maharashtra", 19.252562, 72.980057),
    PlacePoint::new("Sadar Hospital, Jamshedpur, India", 22.758537, 86.201302),
    PlacePoint::new("Fairbank James Friendship memorial Hospital, Ahmednagar, Maharashtra, India", 19.092508, 74.749596),
    PlacePoint::new("Medicare Skin & Cosmetic Clinic, Jayanagar, Bangalore, India", 12.906529, 77.585831),
    PlacePoint::new("Banglore Hospital, Bengaluru, Karnataka, India", 13.006752, 77.561737),
    PlacePoint::new("Indus Hospital, Sector 60, Punjab, India", 30.705317, 76.725052),
    PlacePoint::new("Tiruvalla Medical Mission Hospital, Kerala, India", 9.393924, 76.578423),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_in_range() {
        assert_eq!(TREATMENT_CENTERS.len(), 67);
        for p in TREATMENT_CENTERS {
            assert!((-90.0..=90.0).contains(&p.latitude), "{}", p.name);
            assert!((-180.0..=180.0).contains(&p.longitude), "{}", p.name);
            assert!(!p.name.is_empty());
        }
    }
}
