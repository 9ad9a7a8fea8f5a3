//! Monitoring station table.
//!
//! Entries appear in catalog construction order; a station's model index is
//! its position in this table. Display names are not unique ("Knowledge
//! Park" and "Sector" both repeat), so name resolution is defined as the
//! first match in table order.

use crate::StationRecord;

/// All known monitoring stations, in index order.
pub const STATIONS: [StationRecord; 230] = [
    StationRecord { code: "AP001", name: "Secretariat, Amaravati" },
    StationRecord { code: "AP002", name: "Anand Kala Kshetram, Rajamahendravaram" },
    StationRecord { code: "AP003", name: "Tirumala, Tirupati" },
    StationRecord { code: "AP004", name: "PWD Grounds, Vijayawada" },
    StationRecord { code: "AP005", name: "GVM Corporation, Visakhapatnam" },
    StationRecord { code: "AS001", name: "Railway Colony, Guwahati" },
    StationRecord { code: "BR001", name: "Collectorate, Gaya" },
    StationRecord { code: "BR002", name: "SFTI Kusdihra, Gaya" },
    StationRecord { code: "BR003", name: "Industrial Area, Hajipur" },
    StationRecord { code: "BR004", name: "Muzaffarpur Collectorate, Muzaffarpur" },
    StationRecord { code: "BR005", name: "DRM Office Danapur, Patna" },
    StationRecord { code: "BR006", name: "Govt. High School Shikarpur, Patna" },
    StationRecord { code: "BR007", name: "IGSC Planetarium Complex, Patna" },
    StationRecord { code: "BR008", name: "Muradpur, Patna" },
    StationRecord { code: "BR009", name: "Rajbansi Nagar, Patna" },
    StationRecord { code: "BR010", name: "Samanpura, Patna" },
    StationRecord { code: "CH001", name: "Sector-25, Chandigarh" },
    StationRecord { code: "DL001", name: "Alipur, Delhi" },
    StationRecord { code: "DL002", name: "Anand Vihar, Delhi" },
    StationRecord { code: "DL003", name: "Ashok Vihar, Delhi" },
    StationRecord { code: "DL004", name: "Aya Nagar, Delhi" },
    StationRecord { code: "DL005", name: "Bawana, Delhi" },
    StationRecord { code: "DL006", name: "Burari Crossing, Delhi" },
    StationRecord { code: "DL007", name: "CRRI Mathura Road, Delhi" },
    StationRecord { code: "DL008", name: "DTU, Delhi" },
    StationRecord { code: "DL009", name: "Dr. Karni Singh Shooting Range, Delhi" },
    StationRecord { code: "DL010", name: "Dwarka-Sector 8, Delhi" },
    StationRecord { code: "DL011", name: "East Arjun Nagar, Delhi" },
    StationRecord { code: "DL012", name: "IGI Airport (T3), Delhi" },
    StationRecord { code: "DL013", name: "IHBAS, Dilshad Garden, Delhi" },
    StationRecord { code: "DL014", name: "ITO, Delhi" },
    StationRecord { code: "DL015", name: "Jahangirpuri, Delhi" },
    StationRecord { code: "DL016", name: "Jawaharlal Nehru Stadium, Delhi" },
    StationRecord { code: "DL017", name: "Lodhi Road, Delhi" },
    StationRecord { code: "DL018", name: "Major Dhyan Chand National Stadium, Delhi" },
    StationRecord { code: "DL019", name: "Mandir Marg, Delhi" },
    StationRecord { code: "DL020", name: "Mundka, Delhi" },
    StationRecord { code: "DL021", name: "NSIT Dwarka, Delhi" },
    StationRecord { code: "DL022", name: "Najafgarh, Delhi" },
    StationRecord { code: "DL023", name: "Narela, Delhi" },
    StationRecord { code: "DL024", name: "Nehru Nagar, Delhi" },
    StationRecord { code: "DL025", name: "North Campus, DU, Delhi" },
    StationRecord { code: "DL026", name: "Okhla Phase-2, Delhi" },
    StationRecord { code: "DL027", name: "Patparganj, Delhi" },
    StationRecord { code: "DL028", name: "Punjabi Bagh, Delhi" },
    StationRecord { code: "DL029", name: "Pusa, Delhi" },
    StationRecord { code: "DL030", name: "Pusa, Delhi" },
    StationRecord { code: "DL031", name: "R K Puram, Delhi" },
    StationRecord { code: "DL032", name: "Rohini, Delhi" },
    StationRecord { code: "DL033", name: "Shadipur, Delhi" },
    StationRecord { code: "DL034", name: "Sirifort, Delhi" },
    StationRecord { code: "DL035", name: "Sonia Vihar, Delhi" },
    StationRecord { code: "DL036", name: "Sri Aurobindo Marg, Delhi" },
    StationRecord { code: "DL037", name: "Vivek Vihar, Delhi" },
    StationRecord { code: "DL038", name: "Wazirpur, Delhi" },
    StationRecord { code: "GJ001", name: "Maninagar, Ahmedabad" },
    StationRecord { code: "GJ002", name: "GIDC, Ankleshwar" },
    StationRecord { code: "GJ003", name: "Sector-10, Gandhinagar" },
    StationRecord { code: "GJ004", name: "GIDC, Nandesari" },
    StationRecord { code: "GJ005", name: "Phase-1 GIDC, Vapi" },
    StationRecord { code: "GJ006", name: "Phase-4 GIDC, Vatva" },
    StationRecord { code: "HR001", name: "Patti Mehar, Ambala" },
    StationRecord { code: "HR002", name: "Arya Nagar, Bahadurgarh" },
    StationRecord { code: "HR003", name: "Nathu Colony, Ballabgarh" },
    StationRecord { code: "HR004", name: "H.B. Colony, Bhiwani" },
    StationRecord { code: "HR005", name: "Municipal Corporation Office, Dharuhera" },
    StationRecord { code: "HR006", name: "New Industrial Town, Faridabad" },
    StationRecord { code: "HR007", name: "Sector 11, Faridabad" },
    StationRecord { code: "HR008", name: "Sector 30, Faridabad" },
    StationRecord { code: "HR009", name: "Sector- 16A, Faridabad" },
    StationRecord { code: "HR010", name: "Huda Sector, Fatehabad" },
    StationRecord { code: "HR011", name: "NISE Gwal Pahari, Gurugram" },
    StationRecord { code: "HR012", name: "Sector-51, Gurugram" },
    StationRecord { code: "HR013", name: "Teri Gram, Gurugram" },
    StationRecord { code: "HR014", name: "Vikas Sadan, Gurugram" },
    StationRecord { code: "HR015", name: "Urban Estate-II, Hisar" },
    StationRecord { code: "HR016", name: "Police Lines, Jind" },
    StationRecord { code: "HR017", name: "Rishi Nagar, Kaithal" },
    StationRecord { code: "HR018", name: "Sector-12, Karnal" },
    StationRecord { code: "HR019", name: "Sector-7, Kurukshetra" },
    StationRecord { code: "HR020", name: "General Hospital, Mandikhera" },
    StationRecord { code: "HR021", name: "Sector-2 IMT, Manesar" },
    StationRecord { code: "HR022", name: "Shastri Nagar, Narnaul" },
    StationRecord { code: "HR023", name: "Shyam Nagar, Palwal" },
    StationRecord { code: "HR024", name: "Sector-6, Panchkula" },
    StationRecord { code: "HR025", name: "Sector-18, Panipat" },
    StationRecord { code: "HR026", name: "MD University, Rohtak" },
    StationRecord { code: "HR027", name: "F-Block, Sirsa" },
    StationRecord { code: "HR028", name: "Murthal, Sonipat" },
    StationRecord { code: "HR029", name: "Gobind Pura, Yamuna Nagar" },
    StationRecord { code: "JH001", name: "Tata Stadium, Jorapokhar" },
    StationRecord { code: "KA001", name: "Vidayagiri, Bagalkot" },
    StationRecord { code: "KA002", name: "BTM Layout, Bengaluru" },
    StationRecord { code: "KA003", name: "BWSSB Kadabesanahalli, Bengaluru" },
    StationRecord { code: "KA004", name: "Bapuji Nagar, Bengaluru" },
    StationRecord { code: "KA005", name: "City Railway Station, Bengaluru" },
    StationRecord { code: "KA006", name: "Hebbal, Bengaluru" },
    StationRecord { code: "KA007", name: "Hombegowda Nagar, Bengaluru" },
    StationRecord { code: "KA008", name: "Jayanagar 5th Block, Bengaluru" },
    StationRecord { code: "KA009", name: "Peenya, Bengaluru" },
    StationRecord { code: "KA010", name: "Sanegurava Halli, Bengaluru" },
    StationRecord { code: "KA011", name: "Silk Board, Bengaluru" },
    StationRecord { code: "KA012", name: "Urban, Chamarajanagar" },
    StationRecord { code: "KA013", name: "Chikkaballapur Rural, Chikkaballapur" },
    StationRecord { code: "KA014", name: "Kalyana Nagara, Chikkamagaluru" },
    StationRecord { code: "KA015", name: "Deshpande Nagar, Hubballi" },
    StationRecord { code: "KA016", name: "Lal Bahadur Shastri Nagar, Kalaburagi" },
    StationRecord { code: "KA017", name: "Hebbal 1st Stage, Mysuru" },
    StationRecord { code: "KA018", name: "Vijay Nagar, Ramanagara" },
    StationRecord { code: "KA019", name: "Ibrahimpur, Vijayapura" },
    StationRecord { code: "KA020", name: "Collector Office, Yadgir" },
    StationRecord { code: "KL001", name: "Udyogamandal, Eloor" },
    StationRecord { code: "KL002", name: "Kacheripady, Ernakulam" },
    StationRecord { code: "KL003", name: "Thavakkara, Kannur" },
    StationRecord { code: "KL004", name: "Vyttila, Kochi" },
    StationRecord { code: "KL005", name: "Polayathode, Kollam" },
    StationRecord { code: "KL006", name: "Palayam, Kozhikode" },
    StationRecord { code: "KL007", name: "Kariavattom, Thiruvananthapuram" },
    StationRecord { code: "KL008", name: "Plammoodu, Thiruvananthapuram" },
    StationRecord { code: "MP001", name: "T T Nagar, Bhopal" },
    StationRecord { code: "MP002", name: "Shrivastav Colony, Damoh" },
    StationRecord { code: "MP003", name: "Bhopal Chauraha, Dewas" },
    StationRecord { code: "MP004", name: "City Center, Gwalior" },
    StationRecord { code: "MP005", name: "Phool Bagh, Gwalior" },
    StationRecord { code: "MP006", name: "Chhoti Gwaltoli, Indore" },
    StationRecord { code: "MP007", name: "Marhatal, Jabalpur" },
    StationRecord { code: "MP008", name: "Gole Bazar, Katni" },
    StationRecord { code: "MP009", name: "Sahilara, Maihar" },
    StationRecord { code: "MP010", name: "Sector-D Industrial Area, Mandideep" },
    StationRecord { code: "MP011", name: "Sector-2 Industrial Area, Pithampur" },
    StationRecord { code: "MP012", name: "Shasthri Nagar, Ratlam" },
    StationRecord { code: "MP013", name: "Deen Dayal Nagar, Sagar" },
    StationRecord { code: "MP014", name: "Bandhavgar Colony, Satna" },
    StationRecord { code: "MP015", name: "Vindhyachal STPS, Singrauli" },
    StationRecord { code: "MP016", name: "Mahakaleshwar Temple, Ujjain" },
    StationRecord { code: "MH001", name: "More Chowk Waluj, Aurangabad" },
    StationRecord { code: "MH002", name: "Chandrapur, Chandrapur" },
    StationRecord { code: "MH003", name: "MIDC Khutala, Chandrapur" },
    StationRecord { code: "MH004", name: "Khadakpada, Kalyan" },
    StationRecord { code: "MH005", name: "Bandra, Mumbai" },
    StationRecord { code: "MH006", name: "Borivali East, Mumbai" },
    StationRecord { code: "MH007", name: "Chhatrapati Shivaji Intl. Airport (T2), Mumbai" },
    StationRecord { code: "MH008", name: "Colaba, Mumbai" },
    StationRecord { code: "MH009", name: "Kurla, Mumbai" },
    StationRecord { code: "MH010", name: "Powai, Mumbai" },
    StationRecord { code: "MH011", name: "Sion, Mumbai" },
    StationRecord { code: "MH012", name: "Vasai West, Mumbai" },
    StationRecord { code: "MH013", name: "Vile Parle West, Mumbai" },
    StationRecord { code: "MH014", name: "Worli, Mumbai" },
    StationRecord { code: "MH015", name: "Opp GPO Civil Lines, Nagpur" },
    StationRecord { code: "MH016", name: "Gangapur Road, Nashik" },
    StationRecord { code: "MH017", name: "Airoli, Navi Mumbai" },
    StationRecord { code: "MH018", name: "Mahape, Navi Mumbai" },
    StationRecord { code: "MH019", name: "Nerul, Navi Mumbai" },
    StationRecord { code: "MH020", name: "Karve Road, Pune" },
    StationRecord { code: "MH021", name: "Solapur, Solapur" },
    StationRecord { code: "MH022", name: "Pimpleshwar Mandir, Thane" },
    StationRecord { code: "ML001", name: "Lumpyngngad, Shillong" },
    StationRecord { code: "MZ001", name: "Sikulpuikawn, Aizawl" },
    StationRecord { code: "OD001", name: "GM Office, Brajrajnagar" },
    StationRecord { code: "OD002", name: "Talcher Coalfields,Talcher" },
    StationRecord { code: "PB001", name: "Golden Temple, Amritsar" },
    StationRecord { code: "PB002", name: "Hardev Nagar, Bathinda" },
    StationRecord { code: "PB003", name: "Civil Line, Jalandhar" },
    StationRecord { code: "PB004", name: "Kalal Majra, Khanna" },
    StationRecord { code: "PB005", name: "Punjab Agricultural University, Ludhiana" },
    StationRecord { code: "PB006", name: "RIMT University, Mandi Gobindgarh" },
    StationRecord { code: "PB007", name: "Model Town, Patiala" },
    StationRecord { code: "PB008", name: "Ratanpura, Rupnagar" },
    StationRecord { code: "RJ001", name: "Moti Doongri, Alwar" },
    StationRecord { code: "RJ002", name: "Civil Lines, Ajmer" },
    StationRecord { code: "RJ003", name: "RIICO Ind. Area III, Bhiwadi" },
    StationRecord { code: "RJ004", name: "Adarsh Nagar, Jaipur" },
    StationRecord { code: "RJ005", name: "Police Commissionerate, Jaipur" },
    StationRecord { code: "RJ006", name: "Shastri Nagar, Jaipur" },
    StationRecord { code: "RJ007", name: "Collectorate, Jodhpur" },
    StationRecord { code: "RJ008", name: "Shrinath Puram, Kota" },
    StationRecord { code: "RJ009", name: "Indira Colony Vistar, Pali" },
    StationRecord { code: "RJ010", name: "Ashok Nagar, Udaipur" },
    StationRecord { code: "TN001", name: "Alandur Bus Depot, Chennai" },
    StationRecord { code: "TN002", name: "Manali Village, Chennai" },
    StationRecord { code: "TN003", name: "Manali, Chennai" },
    StationRecord { code: "TN004", name: "Velachery Res. Area, Chennai" },
    StationRecord { code: "TN005", name: "SIDCO Kurichi, Coimbatore" },
    StationRecord { code: "TG001", name: "Bollaram Industrial Area, Hyderabad" },
    StationRecord { code: "TG002", name: "Central University, Hyderabad" },
    StationRecord { code: "TG003", name: "ICRISAT Patancheru, Hyderabad" },
    StationRecord { code: "TG004", name: "IDA Pashamylaram, Hyderabad" },
    StationRecord { code: "TG005", name: "Sanathnagar, Hyderabad" },
    StationRecord { code: "TG006", name: "Zoo Park, Hyderabad" },
    StationRecord { code: "UP001", name: "Sanjay Palace, Agra" },
    StationRecord { code: "UP002", name: "New Collectorate, Baghpat" },
    StationRecord { code: "UP003", name: "Yamunapuram, Bulandshahr" },
    StationRecord { code: "UP004", name: "Indirapuram, Ghaziabad" },
    StationRecord { code: "UP005", name: "Loni, Ghaziabad" },
    StationRecord { code: "UP006", name: "Sanjay Nagar, Ghaziabad" },
    StationRecord { code: "UP007", name: "Vasundhara, Ghaziabad" },
    StationRecord { code: "UP008", name: "Knowledge Park" },
    StationRecord { code: "UP009", name: "Knowledge Park" },
    StationRecord { code: "UP010", name: "Anand Vihar, Hapur" },
    StationRecord { code: "UP011", name: "Nehru Nagar, Kanpur" },
    StationRecord { code: "UP012", name: "Central School, Lucknow" },
    StationRecord { code: "UP013", name: "Gomti Nagar, Lucknow" },
    StationRecord { code: "UP014", name: "Lalbagh, Lucknow" },
    StationRecord { code: "UP015", name: "Nishant Ganj, Lucknow" },
    StationRecord { code: "UP016", name: "Talkatora District Industries Center, Lucknow" },
    StationRecord { code: "UP017", name: "Ganga Nagar, Meerut" },
    StationRecord { code: "UP018", name: "Jai Bhim Nagar, Meerut" },
    StationRecord { code: "UP019", name: "Pallavpuram Phase 2, Meerut" },
    StationRecord { code: "UP020", name: "Lajpat Nagar, Moradabad" },
    StationRecord { code: "UP021", name: "New Mandi, Muzaffarnagar" },
    StationRecord { code: "UP022", name: "Sector" },
    StationRecord { code: "UP023", name: "Sector" },
    StationRecord { code: "UP024", name: "Sector-1, Noida" },
    StationRecord { code: "UP025", name: "Sector-116, Noida" },
    StationRecord { code: "UP026", name: "Ardhali Bazar, Varanasi" },
    StationRecord { code: "WB001", name: "Asansol Court Area, Asansol" },
    StationRecord { code: "WB002", name: "Sidhu Kanhu Indoor Stadium, Durgapur" },
    StationRecord { code: "WB003", name: "Haldia, Haldia" },
    StationRecord { code: "WB004", name: "Belur Math, Howrah" },
    StationRecord { code: "WB005", name: "Ghusuri, Howrah" },
    StationRecord { code: "WB006", name: "Padmapukur, Howrah" },
    StationRecord { code: "WB007", name: "Ballygunge, Kolkata" },
    StationRecord { code: "WB008", name: "Bidhannagar, Kolkata" },
    StationRecord { code: "WB009", name: "Fort William, Kolkata" },
    StationRecord { code: "WB010", name: "Jadavpur, Kolkata" },
    StationRecord { code: "WB011", name: "Rabindra Bharati University, Kolkata" },
    StationRecord { code: "WB012", name: "Rabindra Sarobar, Kolkata" },
    StationRecord { code: "WB013", name: "Victoria, Kolkata" },
    StationRecord { code: "WB014", name: "Ward-32 Bapupara, Siliguri" },
];
